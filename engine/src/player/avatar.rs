//! Avatar
//!
//! Owns everything one player avatar needs and exposes the two callbacks the
//! application loop drives: [`Avatar::frame`] at the variable render rate and
//! [`Avatar::physics_step`] at the fixed physics rate. [`Avatar::update`]
//! runs both from an [`ActionState`] and a [`FixedTimestep`].

use glam::{Mat4, Vec2, Vec3};

use super::footsteps::FootstepEvent;
use super::locomotion::{AvatarLocomotion, MoveResult};
use crate::audio::AudioTrigger;
use crate::camera::FirstPersonCamera;
use crate::input::{ActionState, InputAction};
use crate::physics::{CharacterMover, FixedTimestep};

/// What happened during one [`Avatar::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Physics steps run this frame
    pub physics_steps: usize,
    /// Result of the last physics step, if any ran
    pub last_move: Option<MoveResult>,
    /// Footstep played this frame
    pub footstep: Option<FootstepEvent>,
}

/// Player avatar: locomotion plus its mover, camera rig and footstep audio.
pub struct Avatar<M, A> {
    locomotion: AvatarLocomotion,
    camera: FirstPersonCamera,
    mover: M,
    audio: A,
}

impl<M: CharacterMover, A: AudioTrigger> Avatar<M, A> {
    pub fn new(locomotion: AvatarLocomotion, camera: FirstPersonCamera, mover: M, audio: A) -> Self {
        Self {
            locomotion,
            camera,
            mover,
            audio,
        }
    }

    /// Variable-rate callback: look rotation, then footstep cadence.
    pub fn frame(&mut self, delta_seconds: f32, look_delta: Vec2) -> Option<FootstepEvent> {
        self.locomotion
            .on_look(look_delta.x, look_delta.y, delta_seconds);

        let step = self.locomotion.advance_footsteps(delta_seconds)?;
        self.audio.play_footstep(step.pitch_multiplier);
        Some(step)
    }

    /// Fixed-rate callback: movement for one physics step.
    pub fn physics_step(&mut self, delta_seconds: f32, axes: Vec2, sprint_held: bool) -> MoveResult {
        self.locomotion
            .on_move(axes.x, axes.y, sprint_held, delta_seconds, &mut self.mover)
    }

    /// Run one application frame from polled input.
    ///
    /// Pause toggles the look lock and releases or recaptures the cursor.
    /// Physics steps run first, then the frame callback; per-frame input is
    /// cleared at the end.
    pub fn update(
        &mut self,
        frame_delta: f32,
        input: &mut ActionState,
        timestep: &mut FixedTimestep,
    ) -> FrameReport {
        if input.just_pressed(InputAction::Pause) {
            let locked = self.toggle_input_lock();
            input.set_captured(!locked);
        }

        let physics_steps = timestep.advance(frame_delta);
        let mut last_move = None;
        for _ in 0..physics_steps {
            last_move = Some(self.physics_step(timestep.step(), input.move_axes(), input.sprint_held()));
        }

        let look = input.take_look_delta();
        let footstep = self.frame(frame_delta, look);
        input.end_frame();

        FrameReport {
            physics_steps,
            last_move,
            footstep,
        }
    }

    /// Flip the look lock. Returns the new state.
    pub fn toggle_input_lock(&mut self) -> bool {
        let locked = self.locomotion.toggle_input_lock();
        log::info!("look input {}", if locked { "locked" } else { "unlocked" });
        locked
    }

    /// Avatar feet position, owned by the mover.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.mover.position()
    }

    #[inline]
    pub fn eye_position(&self) -> Vec3 {
        self.camera.eye_position(self.mover.position())
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera
            .view_matrix(self.mover.position(), &self.locomotion)
    }

    pub fn locomotion(&self) -> &AvatarLocomotion {
        &self.locomotion
    }

    pub fn camera(&self) -> &FirstPersonCamera {
        &self.camera
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::FootstepAudio;
    use crate::input::KeyCode;
    use crate::physics::FloorMover;

    fn avatar() -> Avatar<FloorMover, FootstepAudio> {
        Avatar::new(
            AvatarLocomotion::default(),
            FirstPersonCamera::default(),
            FloorMover::new(Vec3::ZERO, 0.0),
            FootstepAudio::new(Some("step.ogg".into())),
        )
    }

    #[test]
    fn test_frame_plays_footstep_through_audio() {
        let mut avatar = avatar();
        avatar.physics_step(0.02, Vec2::new(0.0, 1.0), false);

        assert!(avatar.frame(0.5, Vec2::ZERO).is_none());
        let step = avatar.frame(0.5, Vec2::ZERO).expect("step after 1s of walking");
        assert_eq!(step.pitch_multiplier, 1.0);
        assert_eq!(avatar.audio().play_count(), 1);
    }

    #[test]
    fn test_physics_step_moves_mover() {
        let mut avatar = avatar();
        avatar.physics_step(0.5, Vec2::new(0.0, 1.0), false);

        // Gravity is absorbed by the floor, forward motion is kept
        assert!((avatar.position().z - 3.0).abs() < 1e-4);
        assert_eq!(avatar.position().y, 0.0);
    }

    #[test]
    fn test_update_runs_fixed_steps() {
        let mut avatar = avatar();
        let mut input = ActionState::default();
        let mut timestep = FixedTimestep::default();

        input.handle_key(KeyCode::W, true);
        let report = avatar.update(0.05, &mut input, &mut timestep);

        assert_eq!(report.physics_steps, 2);
        assert!(report.last_move.map(|m| m.moving).unwrap_or(false));
        assert!(avatar.position().z > 0.0);
    }

    #[test]
    fn test_pause_locks_look_and_releases_cursor() {
        let mut avatar = avatar();
        let mut input = ActionState::default();
        let mut timestep = FixedTimestep::default();

        input.handle_key(KeyCode::Escape, true);
        avatar.update(0.016, &mut input, &mut timestep);
        assert!(avatar.locomotion().is_input_locked());
        assert!(!input.is_captured());

        input.handle_mouse_motion(100.0, 0.0);
        avatar.update(0.016, &mut input, &mut timestep);
        assert_eq!(avatar.locomotion().yaw(), 0.0);

        input.handle_key(KeyCode::Escape, false);
        input.handle_key(KeyCode::Escape, true);
        avatar.update(0.016, &mut input, &mut timestep);
        assert!(!avatar.locomotion().is_input_locked());
        assert!(input.is_captured());
    }
}
