//! Displayed-progress animation driver.
//!
//! Assigning a new target progress restarts the animation from zero: the
//! displayed value is stepped toward the target on every tick and snapped
//! to the exact target on the final tick, so floating-point accumulation
//! can never leave the displayed value short of (or past) the request.
//!
//! # Step Modes
//!
//! - [`AnimationMode::SameDuration`]: the step is `0.01 * target`, so any
//!   nonzero target completes in the same number of ticks (~100, i.e.
//!   ~500 ms at the 5 ms tick period).
//! - [`AnimationMode::ProportionalToProgress`]: the step is a fixed
//!   `0.01`, so the tick count (and wall-clock time) grows linearly with
//!   the target.
//!
//! The step is captured when the target is assigned. Changing the mode on
//! the widget only affects subsequent target assignments, never a run
//! already in flight.
//!
//! # Run Lifecycle
//!
//! There is no state machine beyond idle/ticking. At most one run is ever
//! active: assigning a target cancels the previous run before starting the
//! next, so two tick streams can never step the same value concurrently.
//! A run ends either by the snap-to-target tick or by being superseded.

use crate::config::PROGRESS_STEP;

/// Step policy for progress animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationMode {
    /// Step scales with the target, so every target takes roughly the
    /// same wall-clock time to reach.
    #[default]
    SameDuration,

    /// Fixed step, so larger targets take proportionally longer.
    ProportionalToProgress,
}

/// Outcome of one animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// No run is active; nothing happened.
    Idle,

    /// The displayed value advanced; an in-between frame should be drawn.
    Frame,

    /// The displayed value snapped to the target and the run ended; one
    /// final frame should be drawn.
    Completed,
}

impl Tick {
    /// Whether this tick outcome asks the host for a redraw.
    #[inline]
    pub const fn needs_redraw(self) -> bool { !matches!(self, Self::Idle) }
}

/// Advances a displayed progress value toward the last requested target.
///
/// Create one per widget, call [`set_target`](Self::set_target) on every
/// progress assignment and [`tick`](Self::tick) once per tick period.
#[derive(Clone, Copy, Debug)]
pub struct ProgressAnimation {
    /// Last target requested by the caller. `None` until the first
    /// assignment; nothing beyond 0 is filled while unset.
    target: Option<f32>,

    /// Value actually rendered, approaching `target` over time.
    displayed: f32,

    /// Per-tick increment, captured from the mode when the run started.
    step: f32,

    /// Whether a run is active.
    ticking: bool,
}

impl ProgressAnimation {
    /// Create an idle driver with no target.
    pub const fn new() -> Self {
        Self {
            target: None,
            displayed: 0.0,
            step: 0.0,
            ticking: false,
        }
    }

    /// Assign a new target, cancelling any in-flight run and restarting
    /// the displayed value from zero.
    ///
    /// A zero target is applied immediately without entering the ticking
    /// state; the caller still draws one frame for it. Any other value
    /// starts a run with the step captured from `mode`.
    pub fn set_target(&mut self, value: f32, mode: AnimationMode) {
        // Cancel before replacing: at most one run is ever active.
        self.ticking = false;
        self.displayed = 0.0;
        self.target = Some(value);

        if value == 0.0 {
            return;
        }

        self.step = match mode {
            AnimationMode::SameDuration => PROGRESS_STEP * value,
            AnimationMode::ProportionalToProgress => PROGRESS_STEP,
        };
        self.ticking = true;
    }

    /// Advance the active run by one tick.
    ///
    /// Once the displayed value reaches the target (or 1.0), it is set to
    /// the exact target value and the run ends. Idle ticks are no-ops, as
    /// are ticks without a target (defensive; a run is only ever started
    /// together with a target).
    pub fn tick(&mut self) -> Tick {
        if !self.ticking {
            return Tick::Idle;
        }
        let Some(target) = self.target else {
            return Tick::Idle;
        };

        if self.displayed >= target || self.displayed >= 1.0 {
            // Final tick: assign the precise value, preventing any
            // floating-point drift from under/overshooting the request.
            self.displayed = target;
            self.ticking = false;
            Tick::Completed
        } else {
            self.displayed += self.step;
            Tick::Frame
        }
    }

    /// Value currently rendered.
    #[inline]
    pub const fn displayed(&self) -> f32 { self.displayed }

    /// Last target requested, if any.
    #[inline]
    pub const fn target(&self) -> Option<f32> { self.target }

    /// Whether a run is active.
    #[inline]
    pub const fn is_ticking(&self) -> bool { self.ticking }
}

impl Default for ProgressAnimation {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Tick until the run completes, returning the tick count.
    /// Panics if the run fails to terminate within a generous bound.
    fn ticks_until_complete(anim: &mut ProgressAnimation) -> u32 {
        for count in 1..=1000 {
            match anim.tick() {
                Tick::Completed => return count,
                Tick::Frame => {}
                Tick::Idle => panic!("driver went idle without completing"),
            }
        }
        panic!("animation did not terminate within 1000 ticks");
    }

    #[test]
    fn test_new_driver_is_idle() {
        let mut anim = ProgressAnimation::new();
        assert_eq!(anim.target(), None);
        assert_eq!(anim.displayed(), 0.0);
        assert!(!anim.is_ticking());
        assert_eq!(anim.tick(), Tick::Idle, "tick without target is a no-op");
    }

    #[test]
    fn test_zero_target_applies_immediately() {
        let mut anim = ProgressAnimation::new();
        anim.set_target(0.0, AnimationMode::SameDuration);

        assert_eq!(anim.displayed(), 0.0);
        assert_eq!(anim.target(), Some(0.0));
        assert!(!anim.is_ticking(), "zero target must not start a run");
        assert_eq!(anim.tick(), Tick::Idle);
    }

    #[test]
    fn test_converges_to_exact_target() {
        for target in [0.1, 0.3, 0.5, 0.77, 1.0] {
            let mut anim = ProgressAnimation::new();
            anim.set_target(target, AnimationMode::SameDuration);
            ticks_until_complete(&mut anim);

            assert_eq!(
                anim.displayed(),
                target,
                "displayed must equal target {target} exactly, no drift"
            );
            assert!(!anim.is_ticking());
            assert_eq!(anim.tick(), Tick::Idle, "no further ticks after completion");
        }
    }

    #[test]
    fn test_same_duration_tick_counts_match() {
        let mut small = ProgressAnimation::new();
        small.set_target(0.4, AnimationMode::SameDuration);
        let small_ticks = ticks_until_complete(&mut small);

        let mut large = ProgressAnimation::new();
        large.set_target(0.8, AnimationMode::SameDuration);
        let large_ticks = ticks_until_complete(&mut large);

        assert!(
            small_ticks.abs_diff(large_ticks) <= 1,
            "SameDuration targets should finish in the same tick count: {small_ticks} vs {large_ticks}"
        );
    }

    #[test]
    fn test_proportional_tick_count_scales_with_target() {
        let mut small = ProgressAnimation::new();
        small.set_target(0.2, AnimationMode::ProportionalToProgress);
        let small_ticks = ticks_until_complete(&mut small);

        let mut large = ProgressAnimation::new();
        large.set_target(0.9, AnimationMode::ProportionalToProgress);
        let large_ticks = ticks_until_complete(&mut large);

        assert!(
            small_ticks < large_ticks,
            "fixed step means larger targets take more ticks: {small_ticks} vs {large_ticks}"
        );
    }

    #[test]
    fn test_retarget_cancels_previous_run() {
        let mut anim = ProgressAnimation::new();
        anim.set_target(0.9, AnimationMode::ProportionalToProgress);
        for _ in 0..10 {
            anim.tick();
        }
        assert!(anim.displayed() > 0.0);

        // Superseding assignment: old run discarded, displayed restarts at 0.
        anim.set_target(0.3, AnimationMode::ProportionalToProgress);
        assert_eq!(anim.displayed(), 0.0);
        assert_eq!(anim.target(), Some(0.3));

        ticks_until_complete(&mut anim);
        assert_eq!(anim.displayed(), 0.3, "only the superseding run reaches its target");
    }

    #[test]
    fn test_run_is_bounded_at_one() {
        // A target above 1.0 is not rejected (permissive surface), but the
        // 1.0 bound still forces the run to terminate.
        let mut anim = ProgressAnimation::new();
        anim.set_target(1.0, AnimationMode::ProportionalToProgress);
        let ticks = ticks_until_complete(&mut anim);
        assert!(ticks <= 102, "full-range run should need ~101 ticks, took {ticks}");
        assert_eq!(anim.displayed(), 1.0);
    }
}
