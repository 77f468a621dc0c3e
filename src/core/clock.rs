//! Simulation clock and repeating timers.
//!
//! The clock owns the time scale: every per-frame delta handed to gameplay
//! code passes through [`Clock::scaled`], so a scale of 0 freezes spawning,
//! obstacle aging and menu animation without touching any of their state.

use super::constants::{FROZEN_TIME_SCALE, MAX_FRAME_STEP_SECONDS, NORMAL_TIME_SCALE};

/// Smallest period a [`RepeatingTimer`] accepts.
pub const MIN_TIMER_PERIOD: f32 = 0.001;

/// Simulation clock with a time-scale multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct Clock {
    time_scale: f32,
    /// Scaled seconds elapsed since the clock was created.
    elapsed: f64,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            time_scale: NORMAL_TIME_SCALE,
            elapsed: 0.0,
        }
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Negative and non-finite scales are treated as frozen.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            FROZEN_TIME_SCALE
        };
    }

    pub fn freeze(&mut self) {
        self.set_time_scale(FROZEN_TIME_SCALE);
    }

    pub fn resume(&mut self) {
        self.set_time_scale(NORMAL_TIME_SCALE);
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale == FROZEN_TIME_SCALE
    }

    /// Convert a real frame delta into simulation time and advance the clock.
    /// A stalled frame (suspended terminal, debugger) counts as at most
    /// `MAX_FRAME_STEP_SECONDS` so timers never replay the gap in one burst.
    pub fn scaled(&mut self, real_delta: f32) -> f32 {
        let real_delta = if real_delta.is_finite() {
            real_delta.clamp(0.0, MAX_FRAME_STEP_SECONDS)
        } else {
            0.0
        };
        let delta = real_delta * self.time_scale;
        self.elapsed += delta as f64;
        delta
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// Fires once after `initial_delay`, then every `period` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatingTimer {
    period: f32,
    /// Seconds until the next fire.
    remaining: f32,
}

impl RepeatingTimer {
    pub fn new(initial_delay: f32, period: f32) -> Self {
        Self {
            period: period.max(MIN_TIMER_PERIOD),
            remaining: initial_delay.max(0.0),
        }
    }

    /// Timer whose first fire happens one full period from now.
    pub fn every(period: f32) -> Self {
        Self::new(period, period)
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Advance by `delta` seconds and return how many times the timer fired.
    pub fn advance(&mut self, delta: f32) -> u32 {
        if delta <= 0.0 || !delta.is_finite() {
            return 0;
        }
        self.remaining -= delta;
        let mut fired = 0;
        while self.remaining <= 0.0 {
            fired += 1;
            self.remaining += self.period;
        }
        fired
    }

    /// Restart the countdown from a full period.
    pub fn reset(&mut self) {
        self.remaining = self.period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_starts_at_normal_speed() {
        let clock = Clock::new();
        assert_eq!(clock.time_scale(), 1.0);
        assert!(!clock.is_frozen());
    }

    #[test]
    fn test_frozen_clock_scales_delta_to_zero() {
        let mut clock = Clock::new();
        clock.freeze();
        assert!(clock.is_frozen());
        assert_eq!(clock.scaled(0.5), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn test_invalid_time_scale_freezes() {
        let mut clock = Clock::new();
        clock.set_time_scale(f32::NAN);
        assert!(clock.is_frozen());
        clock.set_time_scale(-2.0);
        assert!(clock.is_frozen());
        clock.resume();
        assert_eq!(clock.time_scale(), 1.0);
    }

    #[test]
    fn test_scaled_delta_accumulates_elapsed() {
        let mut clock = Clock::new();
        clock.set_time_scale(2.0);
        assert_eq!(clock.scaled(0.25), 0.5);
        assert!((clock.elapsed() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_long_stall_is_clamped_to_one_step() {
        let mut clock = Clock::new();
        assert_eq!(clock.scaled(60.0), MAX_FRAME_STEP_SECONDS);
        assert_eq!(clock.scaled(f32::INFINITY), 0.0);
        assert_eq!(clock.scaled(-1.0), 0.0);
        assert!((clock.elapsed() - f64::from(MAX_FRAME_STEP_SECONDS)).abs() < 1e-6);
    }

    #[test]
    fn test_timer_waits_for_initial_delay() {
        let mut timer = RepeatingTimer::new(0.15, 0.15);
        assert_eq!(timer.advance(0.1), 0);
        assert_eq!(timer.advance(0.1), 1);
    }

    #[test]
    fn test_timer_fires_multiple_times_on_large_delta() {
        let mut timer = RepeatingTimer::new(0.0, 0.25);
        // Zero delay fires immediately, then at 0.25 and 0.5
        assert_eq!(timer.advance(0.6), 3);
    }

    #[test]
    fn test_timer_ignores_non_positive_delta() {
        let mut timer = RepeatingTimer::every(0.15);
        assert_eq!(timer.advance(0.0), 0);
        assert_eq!(timer.advance(-1.0), 0);
        assert!((timer.remaining() - 0.15).abs() < f32::EPSILON);
    }

    #[test]
    fn test_timer_period_has_floor() {
        let timer = RepeatingTimer::new(0.0, 0.0);
        assert_eq!(timer.period(), MIN_TIMER_PERIOD);
    }
}
