//! Footstep Cadence
//!
//! Cooldown timer that decides when a footstep sound should play. The timer
//! only runs while the avatar is moving; stopping freezes it so the next step
//! lands promptly when motion resumes.
//!
//! # Timing
//!
//! - Walk interval: 1.0 s, pitch 1.0
//! - Sprint interval: 0.5 s, pitch 1.5
//!
//! At most one event fires per [`FootstepCadence::advance`] call. The reset
//! after a step is absolute, so a long frame never produces a burst of steps.

use serde::{Deserialize, Serialize};

/// Default seconds between steps while walking
pub const WALK_INTERVAL: f32 = 1.0;

/// Default seconds between steps while sprinting
pub const SPRINT_INTERVAL: f32 = 0.5;

/// Playback pitch multiplier for walking steps
pub const WALK_PITCH: f32 = 1.0;

/// Playback pitch multiplier for sprinting steps
pub const SPRINT_PITCH: f32 = 1.5;

/// Footstep timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootstepConfig {
    /// Cooldown between walking steps (seconds)
    pub walk_interval: f32,
    /// Cooldown between sprinting steps (seconds), expected <= walk_interval
    pub sprint_interval: f32,
    /// Pitch multiplier applied to walking steps
    pub walk_pitch: f32,
    /// Pitch multiplier applied to sprinting steps
    pub sprint_pitch: f32,
}

impl Default for FootstepConfig {
    fn default() -> Self {
        Self {
            walk_interval: WALK_INTERVAL,
            sprint_interval: SPRINT_INTERVAL,
            walk_pitch: WALK_PITCH,
            sprint_pitch: SPRINT_PITCH,
        }
    }
}

/// A footstep that should be played this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootstepEvent {
    /// Playback pitch multiplier for the footstep clip
    pub pitch_multiplier: f32,
    /// Gait at the moment the step fired
    pub sprinting: bool,
}

/// Countdown-driven footstep trigger.
#[derive(Debug, Clone)]
pub struct FootstepCadence {
    config: FootstepConfig,
    time_remaining: f32,
    is_moving: bool,
    is_sprinting: bool,
}

impl Default for FootstepCadence {
    fn default() -> Self {
        Self::new(FootstepConfig::default())
    }
}

impl FootstepCadence {
    /// Create a cadence with the timer primed to the walk interval.
    pub fn new(config: FootstepConfig) -> Self {
        Self {
            config,
            time_remaining: config.walk_interval,
            is_moving: false,
            is_sprinting: false,
        }
    }

    /// Convenience constructor with default pitches.
    pub fn with_intervals(walk_interval: f32, sprint_interval: f32) -> Self {
        Self::new(FootstepConfig {
            walk_interval,
            sprint_interval,
            ..Default::default()
        })
    }

    /// Record the current gait. Called once per physics step by the locomotion.
    #[inline]
    pub fn set_state(&mut self, moving: bool, sprinting: bool) {
        self.is_moving = moving;
        self.is_sprinting = sprinting;
    }

    /// Advance the timer by one frame.
    ///
    /// Returns a footstep event when the cooldown elapses while moving.
    pub fn advance(&mut self, delta_seconds: f32) -> Option<FootstepEvent> {
        if !self.is_moving {
            return None;
        }

        self.time_remaining -= delta_seconds;
        if self.time_remaining > 0.0 {
            return None;
        }

        self.time_remaining = self.active_interval();
        Some(FootstepEvent {
            pitch_multiplier: self.active_pitch(),
            sprinting: self.is_sprinting,
        })
    }

    /// Interval for the current gait.
    #[inline]
    pub fn active_interval(&self) -> f32 {
        if self.is_sprinting {
            self.config.sprint_interval
        } else {
            self.config.walk_interval
        }
    }

    #[inline]
    fn active_pitch(&self) -> f32 {
        if self.is_sprinting {
            self.config.sprint_pitch
        } else {
            self.config.walk_pitch
        }
    }

    #[inline]
    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    #[inline]
    pub fn is_sprinting(&self) -> bool {
        self.is_sprinting
    }

    pub fn config(&self) -> &FootstepConfig {
        &self.config
    }
}
