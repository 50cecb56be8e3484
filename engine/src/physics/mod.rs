//! Physics module
//!
//! Scheduling and movement plumbing for the avatar. No simulation happens
//! here: collision response belongs to a [`CharacterMover`], and gravity is a
//! constant bias applied by the locomotion.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, time in seconds.
//!
//! # Submodules
//!
//! - [`mover`] - Collision-aware mover trait and a flat-floor implementation
//! - [`timestep`] - Fixed-step accumulator driving the physics callback

pub mod mover;
pub mod timestep;

pub use mover::{CharacterMover, FloorMover, RoomBounds};
pub use timestep::{FixedTimestep, TimestepConfig};
