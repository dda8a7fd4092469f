//! Desktop demo for the progress ring widget.
//!
//! Runs the widget against `embedded-graphics-simulator` with the host
//! loop the library expects: one animation tick per 5 ms, a redraw
//! whenever the widget asks for one.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `1`-`9` | Animate to 10%-90% |
//! | `0` | Animate to 100% |
//! | `R` | Reset progress to 0 |
//! | `M` | Toggle animation mode (same-duration / proportional) |
//! | `P` | Toggle the end-of-arc marker dot |
//! | `T` | Toggle the percentage label |
//! | `D` | Toggle two-decimal label formatting |
//! | `Left`/`Right` | Rotate the start angle by 15° |
//! | `Up`/`Down` | Grow/shrink the reduce angle by 15° |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use std::thread;
use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use progress_ring::colors::WHITE;
use progress_ring::config::TICK_INTERVAL_MS;
use progress_ring::{AnimationMode, ProgressRing};

/// Window side in pixels (the widget fills the whole window).
const SCREEN_SIZE: u32 = 200;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_SIZE, SCREEN_SIZE));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Progress Ring", &output_settings);

    // Start at 12 o'clock with a slightly heavier stroke than the
    // default so the marker dot is easy to see.
    let bounds = Rectangle::new(Point::zero(), Size::new(SCREEN_SIZE, SCREEN_SIZE));
    let mut ring = ProgressRing::with_style(bounds, None, None, -90.0, 8.0);
    ring.set_show_point(true);
    ring.set_progress(0.75);

    // Mirror of the angle properties for the ±15° key adjustments.
    let mut start_angle = -90.0f32;
    let mut reduce_angle = 0.0f32;

    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);

    loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Num1 => ring.set_progress(0.1),
                        Keycode::Num2 => ring.set_progress(0.2),
                        Keycode::Num3 => ring.set_progress(0.3),
                        Keycode::Num4 => ring.set_progress(0.4),
                        Keycode::Num5 => ring.set_progress(0.5),
                        Keycode::Num6 => ring.set_progress(0.6),
                        Keycode::Num7 => ring.set_progress(0.7),
                        Keycode::Num8 => ring.set_progress(0.8),
                        Keycode::Num9 => ring.set_progress(0.9),
                        Keycode::Num0 => ring.set_progress(1.0),
                        Keycode::R => ring.set_progress(0.0),
                        Keycode::M => {
                            let next = match ring.animation_mode() {
                                AnimationMode::SameDuration => AnimationMode::ProportionalToProgress,
                                AnimationMode::ProportionalToProgress => AnimationMode::SameDuration,
                            };
                            ring.set_animation_mode(next);
                        }
                        Keycode::P => ring.set_show_point(!ring.show_point()),
                        Keycode::T => ring.set_show_text(!ring.show_text()),
                        Keycode::D => ring.set_show_double_point(!ring.show_double_point()),
                        Keycode::Left => {
                            start_angle -= 15.0;
                            ring.set_start_angle(start_angle);
                        }
                        Keycode::Right => {
                            start_angle += 15.0;
                            ring.set_start_angle(start_angle);
                        }
                        Keycode::Up => {
                            reduce_angle = (reduce_angle + 15.0).min(345.0);
                            ring.set_reduce_angle(reduce_angle);
                        }
                        Keycode::Down => {
                            reduce_angle = (reduce_angle - 15.0).max(0.0);
                            ring.set_reduce_angle(reduce_angle);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        ring.tick();

        if ring.take_redraw_request() {
            display.clear(WHITE).ok();
            ring.draw(&mut display).ok();
        }

        window.update(&display);
        thread::sleep(tick_interval);
    }
}
