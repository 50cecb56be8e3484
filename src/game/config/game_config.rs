//! Game Configuration
//!
//! Every tunable the walkthrough needs, loaded once at startup from JSON.
//! All sections are optional in the file; anything left out takes the
//! values in `Default`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};
use crate::camera::CameraConfig;
use crate::game::customization::{Material, MaterialCatalog, DEFAULT_RESTAURANT_NAME};
use crate::input::KeyBindings;
use crate::physics::TimestepConfig;
use crate::player::{FootstepConfig, LocomotionConfig};

/// Default footstep clip name
pub const DEFAULT_FOOTSTEP_CLIP: &str = "footstep_wood.wav";

/// Restaurant identity and customization options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantConfig {
    pub name: String,
    /// Clip played for every footstep; `null` leaves footsteps silent
    pub footstep_clip: Option<String>,
    pub catalog: MaterialCatalog,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_RESTAURANT_NAME.to_string(),
            footstep_clip: Some(DEFAULT_FOOTSTEP_CLIP.to_string()),
            catalog: MaterialCatalog {
                walls: vec![
                    Material::new("Whitewash", [0.93, 0.92, 0.88]),
                    Material::new("Red Brick", [0.58, 0.27, 0.2]),
                    Material::new("Walnut Panel", [0.36, 0.24, 0.15]),
                ],
                floors: vec![
                    Material::new("Oak Boards", [0.62, 0.45, 0.28]),
                    Material::new("Checkered Tile", [0.5, 0.5, 0.5]),
                ],
                ceilings: vec![
                    Material::new("Plaster", [0.9, 0.9, 0.88]),
                    Material::new("Pressed Tin", [0.7, 0.7, 0.72]),
                ],
            },
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub locomotion: LocomotionConfig,
    pub footsteps: FootstepConfig,
    pub physics: TimestepConfig,
    pub camera: CameraConfig,
    pub bindings: KeyBindings,
    pub restaurant: RestaurantConfig,
}

impl GameConfig {
    /// Read, parse and validate a JSON config file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        let footsteps = &self.footsteps;
        if footsteps.walk_interval <= 0.0 {
            return Err(invalid(format!("footsteps.walk_interval must be > 0, got {}", footsteps.walk_interval)));
        }
        if footsteps.sprint_interval <= 0.0 {
            return Err(invalid(format!("footsteps.sprint_interval must be > 0, got {}", footsteps.sprint_interval)));
        }
        if footsteps.sprint_interval > footsteps.walk_interval {
            log::warn!(
                "footsteps.sprint_interval ({}) is longer than walk_interval ({}); sprinting will sound slower",
                footsteps.sprint_interval,
                footsteps.walk_interval
            );
        }

        let locomotion = &self.locomotion;
        if locomotion.move_speed < 0.0 {
            return Err(invalid(format!("locomotion.move_speed must be >= 0, got {}", locomotion.move_speed)));
        }
        if locomotion.min_pitch > locomotion.max_pitch {
            return Err(invalid(format!(
                "locomotion.min_pitch ({}) exceeds max_pitch ({})",
                locomotion.min_pitch, locomotion.max_pitch
            )));
        }

        if self.physics.fixed_step <= 0.0 {
            return Err(invalid(format!("physics.fixed_step must be > 0, got {}", self.physics.fixed_step)));
        }
        if self.physics.max_steps_per_frame == 0 {
            return Err(invalid("physics.max_steps_per_frame must be at least 1".to_string()));
        }

        let camera = &self.camera;
        if camera.near <= 0.0 || camera.far <= camera.near {
            return Err(invalid(format!(
                "camera clip planes must satisfy 0 < near < far, got near {} far {}",
                camera.near, camera.far
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}
