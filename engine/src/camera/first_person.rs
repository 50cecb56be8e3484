//! First-Person Camera
//!
//! Derives the camera pose from the avatar: the eye sits `eye_height` above
//! the body position, the body supplies yaw and the camera adds pitch on top.
//!
//! # Coordinate System
//!
//! - +X = right
//! - +Y = up
//! - +Z = forward (left-handed, matching the avatar's local axes)
//!
//! When yaw=0 and pitch=0, the camera looks toward +Z. Positive pitch looks down.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::player::AvatarLocomotion;

/// Eye height above the avatar's feet in meters
pub const EYE_HEIGHT: f32 = 1.6;

/// Vertical field of view in degrees
pub const FOV_Y_DEGREES: f32 = 60.0;

/// Camera projection and placement settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye_height: f32,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye_height: EYE_HEIGHT,
            fov_y_degrees: FOV_Y_DEGREES,
            near: 0.05,
            far: 200.0,
        }
    }
}

/// Camera rig attached to the avatar's head.
///
/// Holds no orientation of its own; yaw and pitch are read from
/// [`AvatarLocomotion`] so the two can never drift apart.
#[derive(Clone, Debug, Default)]
pub struct FirstPersonCamera {
    config: CameraConfig,
}

impl FirstPersonCamera {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// World-space eye position for a body standing at `body_position`.
    #[inline]
    pub fn eye_position(&self, body_position: Vec3) -> Vec3 {
        body_position + Vec3::Y * self.config.eye_height
    }

    /// World-space camera orientation: body yaw, then camera pitch.
    #[inline]
    pub fn rotation(&self, locomotion: &AvatarLocomotion) -> Quat {
        locomotion.body_rotation() * locomotion.camera_rotation()
    }

    /// Normalized view direction.
    #[inline]
    pub fn forward(&self, locomotion: &AvatarLocomotion) -> Vec3 {
        (self.rotation(locomotion) * Vec3::Z).normalize()
    }

    /// Normalized right vector, always horizontal.
    #[inline]
    pub fn right(&self, locomotion: &AvatarLocomotion) -> Vec3 {
        (locomotion.body_rotation() * Vec3::X).normalize()
    }

    /// Normalized up vector, perpendicular to forward and right.
    #[inline]
    pub fn up(&self, locomotion: &AvatarLocomotion) -> Vec3 {
        (self.rotation(locomotion) * Vec3::Y).normalize()
    }

    /// View matrix for rendering.
    pub fn view_matrix(&self, body_position: Vec3, locomotion: &AvatarLocomotion) -> Mat4 {
        Mat4::look_to_lh(
            self.eye_position(body_position),
            self.forward(locomotion),
            self.up(locomotion),
        )
    }

    /// Perspective projection for the given viewport aspect ratio.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_lh(
            self.config.fov_y_degrees.to_radians(),
            aspect_ratio,
            self.config.near,
            self.config.far,
        )
    }
}
