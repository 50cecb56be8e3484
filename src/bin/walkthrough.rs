//! Restaurant Walkthrough - headless avatar demo
//!
//! Run with: `cargo run --bin walkthrough -- --config restaurant.json`
//!
//! Builds the restaurant from config, applies the chosen materials, then
//! drives the avatar through a scripted input sequence at a fixed frame rate:
//!
//! - Walk forward (W)
//! - Sprint (W + Shift)
//! - Turn while walking (mouse right)
//! - Pause (Escape): look locked, mouse ignored
//! - Resume (Escape) and strafe right (D)
//! - Stand still
//!
//! Footsteps and the final pose are logged. Set `RUST_LOG=debug` for every
//! playback request.

use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::{Vec2, Vec3};

use bistro_engine::audio::FootstepAudio;
use bistro_engine::camera::FirstPersonCamera;
use bistro_engine::game::{GameConfig, RestaurantCustomization, Surface, SurfaceKind};
use bistro_engine::input::{ActionState, KeyCode};
use bistro_engine::physics::{FixedTimestep, FloorMover, RoomBounds};
use bistro_engine::player::{Avatar, AvatarLocomotion};

#[derive(Parser)]
#[command(name = "walkthrough")]
#[command(about = "Scripted first-person walkthrough of the restaurant", long_about = None)]
struct Cli {
    /// JSON config file (defaults are used when omitted)
    #[arg(short, long, env = "BISTRO_CONFIG")]
    config: Option<PathBuf>,

    /// Simulated frames per second
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Seconds to simulate
    #[arg(long, default_value = "9")]
    seconds: f32,

    /// Wall material index
    #[arg(long, default_value = "0")]
    wall: usize,

    /// Floor material index
    #[arg(long, default_value = "0")]
    floor: usize,

    /// Ceiling material index
    #[arg(long, default_value = "0")]
    ceiling: usize,

    /// Rename the restaurant
    #[arg(long)]
    name: Option<String>,
}

/// One stretch of scripted input.
struct Phase {
    /// Phase ends at this time (seconds)
    until: f32,
    keys: &'static [KeyCode],
    /// Raw mouse motion per frame (screen space, +y down)
    mouse: Vec2,
}

const SCRIPT: &[Phase] = &[
    Phase { until: 2.0, keys: &[KeyCode::W], mouse: Vec2::ZERO },
    Phase { until: 4.0, keys: &[KeyCode::W, KeyCode::ShiftLeft], mouse: Vec2::ZERO },
    Phase { until: 5.0, keys: &[KeyCode::W], mouse: Vec2::new(3.0, -0.5) },
    Phase { until: 5.1, keys: &[KeyCode::W, KeyCode::Escape], mouse: Vec2::ZERO },
    Phase { until: 6.0, keys: &[KeyCode::W], mouse: Vec2::new(3.0, 0.0) },
    Phase { until: 6.1, keys: &[KeyCode::D, KeyCode::Escape], mouse: Vec2::ZERO },
    Phase { until: 7.0, keys: &[KeyCode::D], mouse: Vec2::ZERO },
    Phase { until: f32::INFINITY, keys: &[], mouse: Vec2::ZERO },
];

fn phase_at(time: f32) -> &'static Phase {
    SCRIPT
        .iter()
        .find(|phase| time < phase.until)
        .unwrap_or(&SCRIPT[SCRIPT.len() - 1])
}

fn build_restaurant(config: &GameConfig, cli: &Cli) -> RestaurantCustomization {
    let mut restaurant = RestaurantCustomization::new(
        config.restaurant.name.clone(),
        config.restaurant.catalog.clone(),
    );
    restaurant.check_catalog();

    if let Some(name) = &cli.name {
        restaurant.set_restaurant_name(name.clone());
    }

    for label in ["north wall", "south wall", "east wall", "west wall"] {
        restaurant.register_surface(Surface::new(SurfaceKind::Wall, label));
    }
    // Serving hatch has no mesh of its own
    restaurant.register_surface(Surface::without_renderer(SurfaceKind::Wall, "serving hatch"));
    restaurant.register_surface(Surface::new(SurfaceKind::Floor, "dining floor"));
    restaurant.register_surface(Surface::new(SurfaceKind::Ceiling, "dining ceiling"));

    for (kind, index) in [
        (SurfaceKind::Wall, cli.wall),
        (SurfaceKind::Floor, cli.floor),
        (SurfaceKind::Ceiling, cli.ceiling),
    ] {
        // Failures are already logged; the surfaces keep their current look
        let _ = restaurant.change_base_material(kind, index);
    }

    restaurant
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match GameConfig::load_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let restaurant = build_restaurant(&config, &cli);
    log::info!(
        "Welcome to {} ({} surfaces)",
        restaurant.restaurant_name(),
        restaurant.surface_count()
    );

    let mover = FloorMover::new(Vec3::new(0.0, 0.0, -6.0), 0.0)
        .with_bounds(RoomBounds::new(Vec2::new(-6.0, -8.0), Vec2::new(6.0, 8.0)));
    let mut avatar = Avatar::new(
        AvatarLocomotion::new(config.locomotion, config.footsteps),
        FirstPersonCamera::new(config.camera),
        mover,
        FootstepAudio::new(config.restaurant.footstep_clip.clone()),
    );
    let mut input = ActionState::new(config.bindings.clone());
    let mut timestep = FixedTimestep::new(config.physics);

    let frame_delta = 1.0 / cli.fps.max(1) as f32;
    let frames = (cli.seconds.max(0.0) / frame_delta).round() as u32;
    let mut held: HashSet<KeyCode> = HashSet::new();
    let mut footsteps = 0u32;

    for frame in 0..frames {
        let time = frame as f32 * frame_delta;
        let phase = phase_at(time);

        let wanted: HashSet<KeyCode> = phase.keys.iter().copied().collect();
        for key in held.difference(&wanted) {
            input.handle_key(*key, false);
        }
        for key in wanted.difference(&held) {
            input.handle_key(*key, true);
        }
        held = wanted;

        if phase.mouse != Vec2::ZERO {
            input.handle_mouse_motion(phase.mouse.x, phase.mouse.y);
        }

        let report = avatar.update(frame_delta, &mut input, &mut timestep);
        if let Some(step) = report.footstep {
            footsteps += 1;
            let position = avatar.position();
            log::info!(
                "t={time:5.2}s footstep {} (pitch {:.1}) at ({:.2}, {:.2})",
                if step.sprinting { "sprint" } else { "walk" },
                step.pitch_multiplier,
                position.x,
                position.z
            );
        }
    }

    let locomotion = avatar.locomotion();
    let eye = avatar.eye_position();
    let forward = avatar.camera().forward(locomotion);
    log::info!(
        "done: {footsteps} footsteps, eye ({:.2}, {:.2}, {:.2}), yaw {:.1}, pitch {:.1}, facing ({:.2}, {:.2}, {:.2})",
        eye.x,
        eye.y,
        eye.z,
        locomotion.yaw(),
        locomotion.pitch(),
        forward.x,
        forward.y,
        forward.z
    );

    ExitCode::SUCCESS
}
