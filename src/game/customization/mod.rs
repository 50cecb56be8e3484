//! Customization Module
//!
//! Runtime material swapping for the restaurant's walls, floors and ceilings.
//!
//! - [`Surface`] - One customizable surface and its renderer slot
//! - [`RestaurantCustomization`] - Name, material catalog and surface registry

pub mod error;
pub mod restaurant;
pub mod surface;

pub use error::CustomizationError;
pub use restaurant::{MaterialCatalog, RestaurantCustomization, DEFAULT_RESTAURANT_NAME};
pub use surface::{Material, MaterialSlot, Surface, SurfaceId, SurfaceKind};
