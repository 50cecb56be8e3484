//! Footstep Tests - Cadence Timing
//!
//! Tests for FootstepCadence: gap bounds at constant frame rates, frozen
//! timer while idle, and sprint versus walk frequency.

use bistro_engine::player::{FootstepCadence, FootstepConfig, SPRINT_PITCH, WALK_PITCH};

/// Run `frames` frames of `dt` at a fixed gait and return the frame indices
/// (1-based) at which a step fired.
fn step_frames(cadence: &mut FootstepCadence, dt: f32, frames: usize) -> Vec<usize> {
    (1..=frames)
        .filter(|_| cadence.advance(dt).is_some())
        .collect()
}

fn assert_gaps_within_bounds(interval: f32, sprinting: bool) {
    for dt in [1.0 / 64.0, 1.0 / 32.0, 0.07, 0.125, 0.3] {
        let mut cadence = FootstepCadence::with_intervals(1.0, 0.5);
        cadence.set_state(true, sprinting);
        // Start from a freshly reset timer
        if sprinting {
            while cadence.advance(dt).is_none() {}
        }

        let frames = step_frames(&mut cadence, dt, (10.0 / dt) as usize);
        assert!(frames.len() >= 2, "dt {dt}: too few steps");

        let max_gap = (interval / dt).ceil() * dt;
        let min_gap = interval - dt;
        for pair in frames.windows(2) {
            let gap = (pair[1] - pair[0]) as f32 * dt;
            assert!(gap <= max_gap + 1e-4, "dt {dt}: gap {gap} > {max_gap}");
            assert!(gap >= min_gap - 1e-4, "dt {dt}: gap {gap} < {min_gap}");
        }
    }
}

// ============================================================================
// Gap Bounds
// ============================================================================

#[test]
fn test_walk_gaps_bounded() {
    assert_gaps_within_bounds(1.0, false);
}

#[test]
fn test_sprint_gaps_bounded() {
    assert_gaps_within_bounds(0.5, true);
}

#[test]
fn test_first_walk_step_after_one_interval() {
    let mut cadence = FootstepCadence::default();
    cadence.set_state(true, false);

    let frames = step_frames(&mut cadence, 1.0 / 64.0, 64);
    assert_eq!(frames, vec![64]);
}

// ============================================================================
// Idle Behaviour
// ============================================================================

#[test]
fn test_no_steps_while_idle() {
    let mut cadence = FootstepCadence::default();
    for _ in 0..1000 {
        assert!(cadence.advance(0.1).is_none());
    }
    assert_eq!(cadence.time_remaining(), 1.0);
}

#[test]
fn test_timer_frozen_when_stopping() {
    let mut cadence = FootstepCadence::default();
    cadence.set_state(true, false);
    cadence.advance(0.25);
    cadence.advance(0.25);
    let remaining = cadence.time_remaining();
    assert!((remaining - 0.5).abs() < 1e-6);

    cadence.set_state(false, false);
    for _ in 0..100 {
        assert!(cadence.advance(0.5).is_none());
    }
    assert_eq!(cadence.time_remaining(), remaining);

    // Resuming picks up where the timer stopped
    cadence.set_state(true, false);
    assert!(cadence.advance(0.25).is_none());
    assert!(cadence.advance(0.25).is_some());
}

// ============================================================================
// Gait
// ============================================================================

#[test]
fn test_sprint_steps_more_often_than_walk() {
    let dt = 1.0 / 64.0;
    let frames = 640;

    let mut walk = FootstepCadence::default();
    walk.set_state(true, false);
    let walk_steps = step_frames(&mut walk, dt, frames).len();

    let mut sprint = FootstepCadence::default();
    sprint.set_state(true, true);
    let sprint_steps = step_frames(&mut sprint, dt, frames).len();

    assert!(sprint_steps > walk_steps, "sprint {sprint_steps} <= walk {walk_steps}");
}

#[test]
fn test_event_pitch_follows_gait() {
    let mut cadence = FootstepCadence::default();
    cadence.set_state(true, false);
    let walk = cadence.advance(1.0).unwrap();
    assert_eq!(walk.pitch_multiplier, WALK_PITCH);
    assert!(!walk.sprinting);

    cadence.set_state(true, true);
    let sprint = cadence.advance(1.0).unwrap();
    assert_eq!(sprint.pitch_multiplier, SPRINT_PITCH);
    assert!(sprint.sprinting);
}

#[test]
fn test_scenario_two_frames_of_point_six() {
    let mut cadence = FootstepCadence::with_intervals(1.0, 0.5);
    cadence.set_state(true, false);

    assert!(cadence.advance(0.6).is_none());
    assert!((cadence.time_remaining() - 0.4).abs() < 1e-6);

    let step = cadence.advance(0.6).unwrap();
    assert_eq!(step.pitch_multiplier, 1.0);
    // Reset is absolute, the 0.2 overshoot is dropped
    assert_eq!(cadence.time_remaining(), 1.0);
}

#[test]
fn test_long_frame_fires_once() {
    let mut cadence = FootstepCadence::default();
    cadence.set_state(true, true);

    assert!(cadence.advance(10.0).is_some());
    assert_eq!(cadence.time_remaining(), 0.5);
    assert!(cadence.advance(0.1).is_none());
}

#[test]
fn test_custom_pitches() {
    let mut cadence = FootstepCadence::new(FootstepConfig {
        walk_pitch: 0.9,
        sprint_pitch: 1.2,
        ..Default::default()
    });
    cadence.set_state(true, true);
    assert_eq!(cadence.advance(1.0).map(|e| e.pitch_multiplier), Some(1.2));
}
