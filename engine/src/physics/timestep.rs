//! Fixed Timestep
//!
//! Turns variable frame deltas into a whole number of fixed physics steps.
//! The frame delta is clamped, the accumulator is capped, and at most
//! `max_steps` run per frame, so a long stall never triggers a spiral of
//! catch-up steps.

use serde::{Deserialize, Serialize};

/// Default physics step (50 Hz)
pub const FIXED_STEP_S: f32 = 1.0 / 50.0;

/// Upper bound on physics steps run for a single frame
pub const MAX_FIXED_STEPS_PER_FRAME: usize = 8;

/// Largest frame delta accepted before clamping (seconds)
pub const MAX_FRAME_DELTA_S: f32 = 0.1;

/// Fixed-step scheduling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestepConfig {
    /// Length of one physics step (seconds)
    pub fixed_step: f32,
    /// Maximum physics steps per frame
    pub max_steps_per_frame: usize,
}

impl Default for TimestepConfig {
    fn default() -> Self {
        Self {
            fixed_step: FIXED_STEP_S,
            max_steps_per_frame: MAX_FIXED_STEPS_PER_FRAME,
        }
    }
}

/// Accumulator-based fixed-step scheduler.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    max_steps: usize,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(TimestepConfig::default())
    }
}

impl FixedTimestep {
    pub fn new(config: TimestepConfig) -> Self {
        Self {
            step: config.fixed_step,
            max_steps: config.max_steps_per_frame.max(1),
            accumulator: 0.0,
        }
    }

    /// Length of one physics step in seconds.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time carried over to the next frame.
    #[inline]
    pub fn accumulated(&self) -> f32 {
        self.accumulator
    }

    /// Feed a frame delta and return how many fixed steps to run now.
    pub fn advance(&mut self, frame_delta: f32) -> usize {
        let delta = frame_delta.clamp(0.0, MAX_FRAME_DELTA_S);
        self.accumulator = (self.accumulator + delta).min(self.step * self.max_steps as f32);

        let mut steps = 0usize;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestep(step: f32, max: usize) -> FixedTimestep {
        FixedTimestep::new(TimestepConfig {
            fixed_step: step,
            max_steps_per_frame: max,
        })
    }

    #[test]
    fn test_accumulates_partial_steps() {
        let mut ts = timestep(0.02, 8);
        assert_eq!(ts.advance(0.015), 0);
        assert_eq!(ts.advance(0.015), 1);
        assert!((ts.accumulated() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_multiple_steps_per_frame() {
        let mut ts = timestep(0.02, 8);
        assert_eq!(ts.advance(0.065), 3);
        assert!((ts.accumulated() - 0.005).abs() < 1e-5);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut ts = timestep(1.0 / 64.0, 4);
        // 2 seconds clamps to 0.1, then the accumulator caps at 4 steps
        assert_eq!(ts.advance(2.0), 4);
        assert_eq!(ts.accumulated(), 0.0);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut ts = FixedTimestep::default();
        assert_eq!(ts.advance(-1.0), 0);
        assert_eq!(ts.accumulated(), 0.0);
    }

    #[test]
    fn test_alpha() {
        let mut ts = timestep(0.02, 8);
        ts.advance(0.01);
        assert!((ts.alpha() - 0.5).abs() < 1e-5);
    }
}
