//! Game Module
//!
//! Restaurant-specific systems that build on top of the engine.

pub mod config;
pub mod customization;

pub use config::{ConfigError, GameConfig, RestaurantConfig};
pub use customization::{
    CustomizationError, Material, MaterialCatalog, RestaurantCustomization, Surface, SurfaceId, SurfaceKind,
};
