//! Bistro Engine Library
//!
//! Core of a first-person restaurant walkthrough: avatar look and movement,
//! footstep cadence, fixed-step scheduling and restaurant surface
//! customization. Rendering and audio mixing stay with the host; this crate
//! only computes poses, displacements and playback requests.
//!
//! # Modules
//!
//! - [`input`] - Key bindings and per-frame action state
//! - [`player`] - Avatar locomotion and footstep cadence
//! - [`physics`] - Character mover seam and fixed timestep
//! - [`camera`] - First-person camera pose and matrices
//! - [`audio`] - Footstep playback seam
//! - [`game`] - Restaurant customization and game configuration
//!
//! # Example
//!
//! ```ignore
//! use bistro_engine::audio::FootstepAudio;
//! use bistro_engine::camera::FirstPersonCamera;
//! use bistro_engine::input::{ActionState, KeyCode};
//! use bistro_engine::physics::{FixedTimestep, FloorMover};
//! use bistro_engine::player::{Avatar, AvatarLocomotion};
//!
//! let mut avatar = Avatar::new(
//!     AvatarLocomotion::default(),
//!     FirstPersonCamera::default(),
//!     FloorMover::new(Vec3::ZERO, 0.0),
//!     FootstepAudio::new(Some("footstep_wood.ogg".into())),
//! );
//! let mut input = ActionState::default();
//! let mut timestep = FixedTimestep::default();
//!
//! input.handle_key(KeyCode::W, true);
//! let report = avatar.update(1.0 / 60.0, &mut input, &mut timestep);
//! ```

pub mod audio;
pub mod camera;
pub mod input;
pub mod physics;
pub mod player;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use audio::{AudioTrigger, FootstepAudio};
pub use camera::FirstPersonCamera;
pub use input::{ActionState, InputAction, KeyBindings, KeyCode};
pub use physics::{CharacterMover, FixedTimestep, FloorMover};
pub use player::{Avatar, AvatarLocomotion, FootstepCadence};
