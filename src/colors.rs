//! Color constants for the progress ring's default palette.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to many embedded displays and requires no
//! conversion when writing to the display buffer. Where possible the
//! constants below come from the `RgbColor` trait, which guarantees
//! optimal component values.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Default label color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Labels on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Default filled-arc color.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Handy alternative fill color.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31). Handy alternative fill color.
pub const BLUE: Rgb565 = Rgb565::BLUE;

// =============================================================================
// Custom Colors (widget-specific)
// =============================================================================

/// Mid gray. Default track color, visible on both light and dark
/// backgrounds without drawing attention from the fill.
/// RGB565: (16, 32, 16) - roughly 50% brightness.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Dark gray. Subtler track alternative for light backgrounds.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const DARK_GRAY: Rgb565 = Rgb565::new(8, 16, 8);
