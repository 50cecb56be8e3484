//! Config Module
//!
//! Startup configuration for locomotion, footsteps, physics scheduling,
//! camera, key bindings and the restaurant.

pub mod error;
pub mod game_config;

pub use error::ConfigError;
pub use game_config::{GameConfig, RestaurantConfig, DEFAULT_FOOTSTEP_CLIP};
