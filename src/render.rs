//! Drawing the ring: track arc, filled arc, marker dot, percentage label.
//!
//! [`draw_ring`] is a pure function of the widget state and issues draw
//! calls against any `DrawTarget<Color = Rgb565>`, which covers SPI
//! display drivers, the desktop simulator, and `MockDisplay` in tests.
//! Draw order matters: the filled arc is stroked after the track so it is
//! the one visible where the two overlap.
//!
//! The widget also implements [`Drawable`], so hosts can write
//! `ring.draw(&mut display)?` like any other `embedded-graphics` shape.

use core::fmt::Write;

use embedded_graphics::{
    Drawable,
    draw_target::DrawTarget,
    geometry::{Angle, Point},
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    primitives::{Arc, Circle, Primitive, PrimitiveStyle},
    text::Text,
};
use heapless::String;

use crate::geometry::{arc_span, display_angle, marker_top_left, ring_metrics, value_end};
use crate::ring::ProgressRing;
use crate::styles::CENTERED_MIDDLE;

/// Render the ring into `target`.
///
/// Reads the widget state without mutating it; the host decides when to
/// call this (normally whenever the widget reports a pending redraw).
pub fn draw_ring<D>(target: &mut D, ring: &ProgressRing) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let bounds = ring.bounds();
    let metrics = ring_metrics(
        bounds.size.width as f32,
        bounds.size.height as f32,
        ring.stroke_width(),
    );
    let origin = bounds.top_left;
    let center = Point::new(
        origin.x + metrics.center_x as i32,
        origin.y + metrics.center_y as i32,
    );
    let diameter = (metrics.radius * 2.0) as u32;
    let stroke = ring.stroke_width() as u32;
    let span = arc_span(ring.reduce_angle());
    let start = display_angle(ring.start_angle());
    let progress = ring.displayed_progress();

    // Background track over the full span.
    Arc::with_center(center, diameter, start, Angle::from_radians(span))
        .into_styled(PrimitiveStyle::with_stroke(ring.path_back_color(), stroke))
        .draw(target)?;

    // Filled arc on top, ending at the progress fraction of the span.
    Arc::with_center(center, diameter, start, Angle::from_radians(span * progress))
        .into_styled(PrimitiveStyle::with_stroke(ring.path_fill_color(), stroke))
        .draw(target)?;

    if ring.show_point() {
        let angle = value_end(ring.start_angle(), ring.reduce_angle(), progress);
        let (x, y) = marker_top_left(metrics.size, ring.stroke_width(), angle);
        Circle::new(Point::new(origin.x + x as i32, origin.y + y as i32), stroke)
            .into_styled(PrimitiveStyle::with_fill(ring.marker_color()))
            .draw(target)?;
    }

    if ring.show_text() {
        let label = format_percentage(progress, ring.show_double_point());
        let style = MonoTextStyle::new(ring.text_font(), ring.text_color());
        let anchor = Point::new(
            origin.x + (bounds.size.width / 2) as i32,
            origin.y + (bounds.size.height / 2) as i32,
        );
        Text::with_text_style(&label, anchor, style, CENTERED_MIDDLE).draw(target)?;
    }

    Ok(())
}

impl Drawable for ProgressRing {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        draw_ring(target, self)
    }
}

/// Format a progress fraction as a percentage label.
///
/// `"100.00%"` is the longest output, 7 bytes, so the 8-byte buffer
/// always fits and the write cannot fail.
fn format_percentage(progress: f32, double_point: bool) -> String<8> {
    let mut label: String<8> = String::new();
    let percent = progress * 100.0;
    if double_point {
        let _ = write!(label, "{percent:.2}%");
    } else {
        let _ = write!(label, "{percent:.0}%");
    }
    label
}

// =============================================================================
// Unit Tests
// =============================================================================
