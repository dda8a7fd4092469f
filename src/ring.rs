//! The progress ring widget: style properties, bounds, and the animation
//! driver, behind explicit setters.
//!
//! Every accepted property write marks the widget dirty; the host checks
//! [`ProgressRing::take_redraw_request`] after mutations and ticks, and
//! redraws when it returns `true`. Two writes are deliberately silent:
//!
//! - a start angle equal to the last accepted value (redundant writes
//!   skip work),
//! - a reduce angle of 360° or more (rejected, previous value kept).
//!
//! Assigning [`set_progress`](ProgressRing::set_progress) hands the value
//! to the [`animations`](crate::animations) driver: a zero target redraws
//! immediately, anything else animates from zero on subsequent
//! [`tick`](ProgressRing::tick) calls.

use embedded_graphics::{mono_font::MonoFont, pixelcolor::Rgb565, primitives::Rectangle};

use crate::animations::{AnimationMode, ProgressAnimation};
use crate::colors::{BLACK, GRAY, RED};
use crate::config::{DEFAULT_REDUCE_ANGLE_DEG, DEFAULT_START_ANGLE_DEG, DEFAULT_STROKE_WIDTH};
use crate::geometry::degrees_to_radians;
use crate::styles::DEFAULT_TEXT_FONT;

/// Circular progress indicator: a track arc, a filled arc proportional to
/// the displayed progress, an optional marker dot at the fill's end, and
/// an optional centered percentage label.
pub struct ProgressRing {
    /// Widget bounds; the ring is fitted into the smaller dimension.
    bounds: Rectangle,

    /// Step policy applied on the next progress assignment.
    mode: AnimationMode,

    /// Track (background arc) color.
    path_back_color: Rgb565,

    /// Filled-arc color.
    path_fill_color: Rgb565,

    /// Last accepted start-angle input in degrees, for the
    /// redundant-write check.
    start_angle_deg: f32,

    /// Arc origin in radians, clockwise-positive from 3 o'clock.
    start_angle: f32,

    /// Amount subtracted from a full circle to get the arc span, radians.
    /// Always below a full circle; larger assignments are rejected.
    reduce_angle: f32,

    /// Stroke thickness in pixels for both arcs, and the marker diameter.
    stroke_width: f32,

    /// Whether to draw the marker dot at the end of the filled arc.
    show_point: bool,

    /// Marker dot color.
    marker_color: Rgb565,

    /// Whether to draw the percentage label.
    show_text: bool,

    /// Label font handle. The widget does not own or manage the font.
    text_font: &'static MonoFont<'static>,

    /// Label color.
    text_color: Rgb565,

    /// Two-decimal (`"50.00%"`) vs integer (`"50%"`) label format.
    show_double_point: bool,

    animation: ProgressAnimation,
    needs_redraw: bool,
}

impl ProgressRing {
    /// Create a ring with the default style: gray track, red fill, start
    /// angle 0°, stroke width 5.
    pub fn new(bounds: Rectangle) -> Self {
        Self::with_style(bounds, None, None, DEFAULT_START_ANGLE_DEG, DEFAULT_STROKE_WIDTH)
    }

    /// Create a ring with explicit style values. `None` colors fall back
    /// to the defaults (gray track, red fill).
    pub fn with_style(
        bounds: Rectangle,
        path_back_color: Option<Rgb565>,
        path_fill_color: Option<Rgb565>,
        start_angle_deg: f32,
        stroke_width: f32,
    ) -> Self {
        let fill = path_fill_color.unwrap_or(RED);
        Self {
            bounds,
            mode: AnimationMode::default(),
            path_back_color: path_back_color.unwrap_or(GRAY),
            path_fill_color: fill,
            start_angle_deg,
            start_angle: degrees_to_radians(start_angle_deg),
            reduce_angle: degrees_to_radians(DEFAULT_REDUCE_ANGLE_DEG),
            stroke_width,
            show_point: false,
            marker_color: fill,
            show_text: true,
            text_font: DEFAULT_TEXT_FONT,
            text_color: BLACK,
            show_double_point: true,
            animation: ProgressAnimation::new(),
            needs_redraw: true,
        }
    }

    // =========================================================================
    // Property Setters
    // =========================================================================

    /// Set the step policy for subsequent progress assignments.
    ///
    /// A running animation keeps the step it started with; the new mode
    /// only applies from the next [`set_progress`](Self::set_progress)
    /// call. The write still requests a redraw so an idle display
    /// reflects up-to-date state.
    pub fn set_animation_mode(&mut self, mode: AnimationMode) {
        self.mode = mode;
        self.needs_redraw = true;
    }

    /// Set the track color.
    pub fn set_path_back_color(&mut self, color: Rgb565) {
        self.path_back_color = color;
        self.needs_redraw = true;
    }

    /// Set the filled-arc color.
    pub fn set_path_fill_color(&mut self, color: Rgb565) {
        self.path_fill_color = color;
        self.needs_redraw = true;
    }

    /// Set the arc origin in degrees (0° at 3 o'clock, clockwise).
    ///
    /// Writing the value that was last accepted is a no-op and does not
    /// request a redraw.
    pub fn set_start_angle(&mut self, degrees: f32) {
        if self.start_angle_deg == degrees {
            return;
        }
        self.start_angle_deg = degrees;
        self.start_angle = degrees_to_radians(degrees);
        self.needs_redraw = true;
    }

    /// Set the amount, in degrees, removed from the full circle to get
    /// the arc span.
    ///
    /// Values of 360° or more would leave no arc and are silently
    /// ignored, keeping the previous value.
    pub fn set_reduce_angle(&mut self, degrees: f32) {
        if degrees >= 360.0 {
            return;
        }
        self.reduce_angle = degrees_to_radians(degrees);
        self.needs_redraw = true;
    }

    /// Set the stroke thickness for both arcs (also the marker size).
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
        self.needs_redraw = true;
    }

    /// Show or hide the end-of-arc marker dot.
    pub fn set_show_point(&mut self, show: bool) {
        self.show_point = show;
        self.needs_redraw = true;
    }

    /// Set the marker dot color.
    pub fn set_marker_color(&mut self, color: Rgb565) {
        self.marker_color = color;
        self.needs_redraw = true;
    }

    /// Show or hide the percentage label.
    pub fn set_show_text(&mut self, show: bool) {
        self.show_text = show;
        self.needs_redraw = true;
    }

    /// Set the label font. The font is an externally owned handle.
    pub fn set_text_font(&mut self, font: &'static MonoFont<'static>) {
        self.text_font = font;
        self.needs_redraw = true;
    }

    /// Set the label color.
    pub fn set_text_color(&mut self, color: Rgb565) {
        self.text_color = color;
        self.needs_redraw = true;
    }

    /// Choose between two-decimal and integer percentage formatting.
    pub fn set_show_double_point(&mut self, double: bool) {
        self.show_double_point = double;
        self.needs_redraw = true;
    }

    /// Assign a new target progress in `[0, 1]`.
    ///
    /// Cancels any running animation and restarts the displayed value
    /// from zero. A zero target is applied immediately with a single
    /// redraw; any other value animates, with redraws requested by the
    /// ticks themselves.
    pub fn set_progress(&mut self, value: f32) {
        self.animation.set_target(value, self.mode);
        if !self.animation.is_ticking() {
            self.needs_redraw = true;
        }
    }

    // =========================================================================
    // Animation and Redraw
    // =========================================================================

    /// Advance the animation by one tick period.
    ///
    /// Returns `true` when the tick produced a frame (and therefore
    /// requested a redraw); idle ticks return `false` and cost nothing.
    pub fn tick(&mut self) -> bool {
        let outcome = self.animation.tick();
        if outcome.needs_redraw() {
            self.needs_redraw = true;
        }
        outcome.needs_redraw()
    }

    /// Read and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    /// Whether an animation run is in flight.
    #[inline]
    pub const fn is_animating(&self) -> bool { self.animation.is_ticking() }

    /// Progress value currently rendered.
    #[inline]
    pub const fn displayed_progress(&self) -> f32 { self.animation.displayed() }

    /// Last progress value requested, if any.
    #[inline]
    pub const fn target_progress(&self) -> Option<f32> { self.animation.target() }

    // =========================================================================
    // Accessors (read by the render procedure)
    // =========================================================================

    #[inline]
    pub const fn bounds(&self) -> Rectangle { self.bounds }

    #[inline]
    pub const fn animation_mode(&self) -> AnimationMode { self.mode }

    #[inline]
    pub const fn path_back_color(&self) -> Rgb565 { self.path_back_color }

    #[inline]
    pub const fn path_fill_color(&self) -> Rgb565 { self.path_fill_color }

    /// Arc origin in radians.
    #[inline]
    pub const fn start_angle(&self) -> f32 { self.start_angle }

    /// Full-circle reduction in radians.
    #[inline]
    pub const fn reduce_angle(&self) -> f32 { self.reduce_angle }

    #[inline]
    pub const fn stroke_width(&self) -> f32 { self.stroke_width }

    #[inline]
    pub const fn show_point(&self) -> bool { self.show_point }

    #[inline]
    pub const fn marker_color(&self) -> Rgb565 { self.marker_color }

    #[inline]
    pub const fn show_text(&self) -> bool { self.show_text }

    #[inline]
    pub const fn text_font(&self) -> &'static MonoFont<'static> { self.text_font }

    #[inline]
    pub const fn text_color(&self) -> Rgb565 { self.text_color }

    #[inline]
    pub const fn show_double_point(&self) -> bool { self.show_double_point }
}

// =============================================================================
// Unit Tests
// =============================================================================
