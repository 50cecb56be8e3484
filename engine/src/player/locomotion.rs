//! Avatar Locomotion
//!
//! First-person look and movement for the player avatar.
//!
//! Look input is split across two owners: the body turns only in yaw, the
//! camera tilts only in pitch. Keeping the body upright keeps its forward
//! axis on the ground plane, which the movement math relies on.
//!
//! # Movement Model
//!
//! - Speed: 6.0 m/s, sprint multiplier 1.5
//! - Gravity: constant -9.8 m/s vertical bias, written fresh every step and
//!   never integrated (no acceleration, no terminal velocity)
//! - Axes are avatar-local (+X right, +Z forward) and rotated by yaw into
//!   world space before the mover resolves collisions
//!
//! # Usage
//!
//! ```rust,ignore
//! use bistro_engine::player::AvatarLocomotion;
//! use bistro_engine::physics::FloorMover;
//!
//! let mut locomotion = AvatarLocomotion::default();
//! let mut mover = FloorMover::new(Vec3::ZERO, 0.0);
//!
//! // Every frame
//! locomotion.on_look(look.x, look.y, frame_dt);
//! if let Some(step) = locomotion.advance_footsteps(frame_dt) { /* play */ }
//!
//! // Every physics step
//! let result = locomotion.on_move(axes.x, axes.y, sprint, fixed_dt, &mut mover);
//! ```

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::footsteps::{FootstepCadence, FootstepConfig, FootstepEvent};
use crate::physics::CharacterMover;

/// Movement speed in meters per second
pub const MOVE_SPEED: f32 = 6.0;

/// Speed multiplier while sprint is held
pub const SPRINT_MULTIPLIER: f32 = 1.5;

/// Vertical component written into every movement step (m/s, negative = down)
pub const GRAVITY_MAGNITUDE: f32 = -9.8;

/// Look sensitivity in degrees per pointer unit per second
pub const LOOK_SENSITIVITY: f32 = 30.0;

/// Lowest camera pitch in degrees (looking up)
pub const MIN_PITCH: f32 = -45.0;

/// Highest camera pitch in degrees (looking down)
pub const MAX_PITCH: f32 = 45.0;

/// Wrap an angle into [0, 360).
///
/// `rem_euclid` alone rounds tiny negative angles up to exactly 360.
#[inline]
fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Locomotion tuning values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub move_speed: f32,
    pub sprint_multiplier: f32,
    pub gravity_magnitude: f32,
    pub look_sensitivity_x: f32,
    pub look_sensitivity_y: f32,
    /// Pitch limits in degrees (min, max)
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            sprint_multiplier: SPRINT_MULTIPLIER,
            gravity_magnitude: GRAVITY_MAGNITUDE,
            look_sensitivity_x: LOOK_SENSITIVITY,
            look_sensitivity_y: LOOK_SENSITIVITY,
            min_pitch: MIN_PITCH,
            max_pitch: MAX_PITCH,
        }
    }
}

/// Outcome of one physics step of movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// World-space displacement requested from the mover
    pub displacement: Vec3,
    /// Displacement the mover actually applied after collision
    pub applied: Vec3,
    pub moving: bool,
    pub sprinting: bool,
}

impl MoveResult {
    /// Result of a step with no movement input.
    pub const IDLE: Self = Self {
        displacement: Vec3::ZERO,
        applied: Vec3::ZERO,
        moving: false,
        sprinting: false,
    };
}

/// First-person avatar controller: yaw/pitch look plus gravity-biased movement.
///
/// Owns the avatar's [`FootstepCadence`] and keeps it informed of the gait
/// every physics step.
#[derive(Debug, Clone)]
pub struct AvatarLocomotion {
    /// Body heading in degrees, wrapped into [0, 360)
    yaw: f32,
    /// Camera tilt in degrees, clamped to [min_pitch, max_pitch]
    pitch: f32,
    config: LocomotionConfig,
    /// While locked, look input is discarded (menus, pause)
    input_locked: bool,
    footsteps: FootstepCadence,
}

impl Default for AvatarLocomotion {
    fn default() -> Self {
        Self::new(LocomotionConfig::default(), FootstepConfig::default())
    }
}

impl AvatarLocomotion {
    pub fn new(config: LocomotionConfig, footsteps: FootstepConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0_f32.clamp(config.min_pitch, config.max_pitch),
            config,
            input_locked: false,
            footsteps: FootstepCadence::new(footsteps),
        }
    }

    /// Apply one frame of pointer delta.
    ///
    /// `delta_y` is positive when the pointer moves up; moving up looks up,
    /// which lowers the pitch angle.
    pub fn on_look(&mut self, delta_x: f32, delta_y: f32, delta_seconds: f32) {
        if self.input_locked {
            return;
        }

        let yaw_delta = delta_x * self.config.look_sensitivity_x * delta_seconds;
        self.yaw = wrap_degrees(self.yaw + yaw_delta);

        let pitch_delta = delta_y * self.config.look_sensitivity_y * delta_seconds;
        self.pitch = (self.pitch - pitch_delta).clamp(self.config.min_pitch, self.config.max_pitch);
    }

    /// Apply one physics step of movement input.
    ///
    /// `axis_x` strafes right, `axis_z` moves forward, both typically in [-1, 1].
    /// With no input the mover is not called and the cadence is told the
    /// avatar is idle.
    pub fn on_move<M: CharacterMover + ?Sized>(
        &mut self,
        axis_x: f32,
        axis_z: f32,
        sprint_held: bool,
        delta_seconds: f32,
        mover: &mut M,
    ) -> MoveResult {
        let mut x = axis_x * self.config.move_speed;
        let mut z = axis_z * self.config.move_speed;

        if x == 0.0 && z == 0.0 {
            self.footsteps.set_state(false, false);
            return MoveResult::IDLE;
        }

        if sprint_held {
            x *= self.config.sprint_multiplier;
            z *= self.config.sprint_multiplier;
        }
        self.footsteps.set_state(true, sprint_held);

        // Gravity replaces the vertical component each step.
        let local = Vec3::new(x, self.config.gravity_magnitude, z) * delta_seconds;
        let displacement = self.body_rotation() * local;
        let applied = mover.move_by(displacement);

        MoveResult {
            displacement,
            applied,
            moving: true,
            sprinting: sprint_held,
        }
    }

    /// Advance the footstep cadence by one frame.
    #[inline]
    pub fn advance_footsteps(&mut self, delta_seconds: f32) -> Option<FootstepEvent> {
        self.footsteps.advance(delta_seconds)
    }

    /// Flip the look lock. Returns the new state.
    pub fn toggle_input_lock(&mut self) -> bool {
        self.input_locked = !self.input_locked;
        self.input_locked
    }

    #[inline]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    /// Body heading in degrees.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Camera tilt in degrees.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the heading directly (degrees, wrapped).
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = wrap_degrees(yaw);
    }

    /// Set the camera tilt directly (degrees, clamped to limits).
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.config.min_pitch, self.config.max_pitch);
    }

    /// Yaw-only rotation of the avatar body.
    #[inline]
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians())
    }

    /// Pitch-only rotation of the camera, relative to the body.
    #[inline]
    pub fn camera_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch.to_radians())
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn footsteps(&self) -> &FootstepCadence {
        &self.footsteps
    }
}
