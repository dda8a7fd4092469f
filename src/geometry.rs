//! Angle arithmetic and marker placement for the ring.
//!
//! All public angles are clockwise-positive radians with 0 at the
//! 3 o'clock position, matching screen coordinates (y grows downward, so
//! `(cos θ, sin θ)` walks the circle clockwise). `embedded-graphics`
//! arcs follow the same screen convention on a y-down display, so
//! [`display_angle`] is a plain unit adapter with no direction change.
//!
//! Everything in this module is a pure function of its inputs; the render
//! procedure and the tests share these exact computations.

use core::f32::consts::{PI, TAU};

use embedded_graphics::geometry::Angle;
use micromath::F32;

use crate::config::EDGE_INSET;

/// Convert a caller-facing degree value to radians.
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 { degrees * PI / 180.0 }

/// Ring placement within a bounding box, in widget-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingMetrics {
    /// Side of the square the ring is fitted into: `min(width, height)`.
    pub size: f32,

    /// Ring center, `(size / 2, size / 2)`.
    pub center_x: f32,
    pub center_y: f32,

    /// Arc radius: half the size, minus half the stroke so the stroke
    /// stays inside the box, minus the one-pixel edge inset.
    pub radius: f32,
}

/// Fit the ring into a bounding box of the given dimensions.
pub fn ring_metrics(width: f32, height: f32, stroke_width: f32) -> RingMetrics {
    let size = width.min(height);
    let half = size * 0.5;
    RingMetrics {
        size,
        center_x: half,
        center_y: half,
        radius: half - stroke_width * 0.5 - EDGE_INSET,
    }
}

/// Total angle available for the ring: a full circle minus the reduction.
#[inline]
pub fn arc_span(reduce_angle: f32) -> f32 { TAU - reduce_angle }

/// Angular end of the background track.
#[inline]
pub fn arc_end(start_angle: f32, reduce_angle: f32) -> f32 {
    start_angle + arc_span(reduce_angle)
}

/// Angular end of the filled arc, linearly interpolated by progress.
#[inline]
pub fn value_end(start_angle: f32, reduce_angle: f32, progress: f32) -> f32 {
    start_angle + arc_span(reduce_angle) * progress
}

/// Top-left corner of a `stroke × stroke` marker dot centered on the ring
/// at the given angle.
///
/// The dot rides a slightly tighter circle of radius
/// `(size - stroke) / 2 - 1` so it stays centered on the stroke, and the
/// half-stroke offset converts the dot's center to its top-left corner.
pub fn marker_top_left(size: f32, stroke_width: f32, angle: f32) -> (f32, f32) {
    let orbit = (size - stroke_width) * 0.5 - EDGE_INSET;
    let half = size * 0.5;
    let half_stroke = stroke_width * 0.5;
    let x = half + orbit * F32(angle).cos().0 - half_stroke;
    let y = half + orbit * F32(angle).sin().0 - half_stroke;
    (x, y)
}

/// Convert clockwise-positive widget radians to an `embedded-graphics`
/// angle.
///
/// Positive angles sweep clockwise on the y-down screen, the widget's
/// own convention, so the value passes through unchanged; the marker
/// trigonometry above and the arc primitives stay in agreement.
#[inline]
pub fn display_angle(radians: f32) -> Angle { Angle::from_radians(radians) }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_conversion() {
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert_eq!(degrees_to_radians(180.0), PI);
        assert_eq!(degrees_to_radians(-90.0), -PI / 2.0);
    }

    #[test]
    fn test_ring_metrics_square_bounds() {
        // 100x100 box, stroke 5: center (50, 50), radius 50 - 2.5 - 1.
        let m = ring_metrics(100.0, 100.0, 5.0);
        assert_eq!(m.size, 100.0);
        assert_eq!(m.center_x, 50.0);
        assert_eq!(m.center_y, 50.0);
        assert_eq!(m.radius, 46.5);
    }

    #[test]
    fn test_ring_metrics_uses_smaller_dimension() {
        let m = ring_metrics(120.0, 80.0, 4.0);
        assert_eq!(m.size, 80.0);
        assert_eq!(m.center_x, 40.0);
        assert_eq!(m.radius, 37.0);
    }

    #[test]
    fn test_half_progress_spans_half_circle() {
        // Full ring from angle 0 at 50%: the fill ends exactly at π.
        assert_eq!(value_end(0.0, 0.0, 0.5), PI);
    }

    #[test]
    fn test_arc_end_with_reduction() {
        // Reducing by 90° leaves a 270° track.
        let reduce = degrees_to_radians(90.0);
        let end = arc_end(0.0, reduce);
        assert!((end - 1.5 * PI).abs() < 1e-6, "got {end}");
    }

    #[test]
    fn test_value_end_scales_with_reduction() {
        let reduce = degrees_to_radians(90.0);
        let end = value_end(0.0, reduce, 0.5);
        assert!((end - 0.75 * PI).abs() < 1e-6, "got {end}");
    }

    #[test]
    fn test_marker_rightmost_point() {
        // Angle 0 is 3 o'clock: the dot's center sits at
        // (50 + 46.5, 50), so its top-left corner is offset by half the
        // stroke in both axes.
        let (x, y) = marker_top_left(100.0, 5.0, 0.0);
        assert_eq!(x, 94.0);
        assert_eq!(y, 47.5);
    }

    #[test]
    fn test_marker_bottom_point() {
        // π/2 clockwise from 3 o'clock is the bottom of the ring
        // (y grows downward on screen).
        let (x, y) = marker_top_left(100.0, 5.0, PI / 2.0);
        assert!((x - 47.5).abs() < 0.5, "got x {x}");
        assert!((y - 94.0).abs() < 0.5, "got y {y}");
    }

    #[test]
    fn test_display_angle_preserves_direction() {
        // Same clockwise-positive convention on both sides: no negation.
        let a = display_angle(PI / 2.0);
        assert!((a.to_degrees() - 90.0).abs() < 1e-4, "got {}", a.to_degrees());
    }
}
