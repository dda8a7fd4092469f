//! Animation timing and default property values.
//!
//! The widget never reads a clock. The host loop (simulator binary,
//! firmware timer task, or a test) calls [`ProgressRing::tick`] once per
//! [`TICK_INTERVAL_MS`] and the per-tick step constants below determine
//! how fast the displayed progress converges on its target.
//!
//! [`ProgressRing::tick`]: crate::ring::ProgressRing::tick

// =============================================================================
// Animation Timing
// =============================================================================

/// Animation tick period in milliseconds.
///
/// With the base step of [`PROGRESS_STEP`] per tick, a full 0-to-100%
/// animation takes `100 * 5 ms = 500 ms`.
pub const TICK_INTERVAL_MS: u64 = 5;

/// Base progress increment per tick.
///
/// `SameDuration` mode scales this by the target value so every target is
/// reached in the same number of ticks; `ProportionalToProgress` mode
/// applies it unscaled so larger targets take proportionally longer.
pub const PROGRESS_STEP: f32 = 0.01;

// =============================================================================
// Geometry
// =============================================================================

/// One-pixel ring inset so the stroke does not touch the widget edge,
/// where it would otherwise be clipped flat.
pub const EDGE_INSET: f32 = 1.0;

// =============================================================================
// Property Defaults
// =============================================================================

/// Default stroke thickness in pixels. Also the marker dot diameter.
pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;

/// Default arc origin in degrees (3 o'clock position).
pub const DEFAULT_START_ANGLE_DEG: f32 = 0.0;

/// Default full-circle reduction in degrees (no reduction: full ring).
pub const DEFAULT_REDUCE_ANGLE_DEG: f32 = 0.0;
