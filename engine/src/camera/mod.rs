//! Camera Module
//!
//! First-person camera math for the avatar.
//! This module is window-system agnostic - it only deals with camera pose and matrices.

pub mod first_person;

pub use first_person::{CameraConfig, FirstPersonCamera};
