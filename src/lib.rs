//! Animated circular progress ring widget for `embedded-graphics`.
//!
//! The crate provides a single leaf widget, [`ProgressRing`]: a circular
//! track arc plus a filled arc proportional to a progress value in `[0, 1]`,
//! with an optional end-of-arc marker dot and an optional centered
//! percentage label.
//!
//! Progress changes animate: assigning a new target via
//! [`ProgressRing::set_progress`] resets the displayed value to zero and
//! steps it toward the target on every [`ProgressRing::tick`] call. The
//! widget itself is clock-free; the host event loop calls `tick()` at
//! [`config::TICK_INTERVAL_MS`] and redraws whenever
//! [`ProgressRing::take_redraw_request`] returns `true`.
//!
//! Modules:
//!
//! - [`ring`]: the widget state and property setters
//! - [`animations`]: the displayed-progress animation driver
//! - [`render`]: arc, marker, and label drawing
//! - [`geometry`]: angle arithmetic and marker placement
//! - [`colors`]: RGB565 color constants for the default palette
//! - [`config`]: animation timing and default property values
//! - [`styles`]: pre-computed text styles
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! Trigonometry comes from `micromath` and label formatting uses
//! `heapless`, so there are no dependencies on `std` or an allocator.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod colors;
pub mod config;
pub mod geometry;
pub mod render;
pub mod ring;
pub mod styles;

// Re-export the widget surface
pub use animations::AnimationMode;
pub use render::draw_ring;
pub use ring::ProgressRing;
