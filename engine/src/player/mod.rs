//! Player Module
//!
//! First-person avatar control.
//!
//! # Components
//!
//! - [`AvatarLocomotion`] - Yaw/pitch look and gravity-biased movement through a mover
//! - [`FootstepCadence`] - Gait-dependent footstep timer
//! - [`Avatar`] - Locomotion wired to a mover, camera rig and footstep audio

pub mod avatar;
pub mod footsteps;
pub mod locomotion;

pub use avatar::{Avatar, FrameReport};
pub use footsteps::{
    FootstepCadence, FootstepConfig, FootstepEvent,
    SPRINT_INTERVAL, SPRINT_PITCH, WALK_INTERVAL, WALK_PITCH,
};
pub use locomotion::{
    AvatarLocomotion, LocomotionConfig, MoveResult,
    GRAVITY_MAGNITUDE, LOOK_SENSITIVITY, MAX_PITCH, MIN_PITCH, MOVE_SPEED, SPRINT_MULTIPLIER,
};
