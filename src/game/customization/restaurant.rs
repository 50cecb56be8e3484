//! Restaurant Customization
//!
//! Holds the restaurant's name, the selectable materials for each surface
//! category and the registry of surfaces those materials are applied to.
//! Surfaces register on creation and deregister on removal; a material
//! change is broadcast to every registered surface of the chosen kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::CustomizationError;
use super::surface::{Material, Surface, SurfaceId, SurfaceKind};

/// Default restaurant name
pub const DEFAULT_RESTAURANT_NAME: &str = "My Restaurant";

/// Selectable materials per surface category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialCatalog {
    pub walls: Vec<Material>,
    pub floors: Vec<Material>,
    pub ceilings: Vec<Material>,
}

impl MaterialCatalog {
    /// Materials offered for `kind`.
    pub fn materials(&self, kind: SurfaceKind) -> &[Material] {
        match kind {
            SurfaceKind::Wall => &self.walls,
            SurfaceKind::Floor => &self.floors,
            SurfaceKind::Ceiling => &self.ceilings,
        }
    }

    /// Look up one material, reporting an out-of-range index.
    pub fn get(&self, kind: SurfaceKind, index: usize) -> Result<&Material, CustomizationError> {
        let materials = self.materials(kind);
        materials
            .get(index)
            .ok_or(CustomizationError::InvalidMaterialIndex {
                kind,
                index,
                available: materials.len(),
            })
    }
}

/// Customization manager for one restaurant.
#[derive(Debug, Clone)]
pub struct RestaurantCustomization {
    name: String,
    catalog: MaterialCatalog,
    surfaces: BTreeMap<SurfaceId, Surface>,
    next_id: u32,
}

impl Default for RestaurantCustomization {
    fn default() -> Self {
        Self::new(DEFAULT_RESTAURANT_NAME, MaterialCatalog::default())
    }
}

impl RestaurantCustomization {
    pub fn new(name: impl Into<String>, catalog: MaterialCatalog) -> Self {
        Self {
            name: name.into(),
            catalog,
            surfaces: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Report every empty material category.
    ///
    /// Each empty category is logged as an error; the kinds are returned so
    /// callers can grey out the matching menu.
    pub fn check_catalog(&self) -> Vec<SurfaceKind> {
        let empty: Vec<SurfaceKind> = SurfaceKind::ALL
            .into_iter()
            .filter(|kind| self.catalog.materials(*kind).is_empty())
            .collect();
        for kind in &empty {
            log::error!("{kind} materials are not set or empty for '{}'", self.name);
        }
        empty
    }

    pub fn set_restaurant_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn restaurant_name(&self) -> &str {
        &self.name
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    #[inline]
    pub fn materials(&self, kind: SurfaceKind) -> &[Material] {
        self.catalog.materials(kind)
    }

    /// Add a surface to the registry.
    pub fn register_surface(&mut self, surface: Surface) -> SurfaceId {
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        self.surfaces.insert(id, surface);
        id
    }

    /// Remove a surface; later material changes no longer reach it.
    pub fn deregister_surface(&mut self, id: SurfaceId) -> Option<Surface> {
        self.surfaces.remove(&id)
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(&id)
    }

    /// Registered surfaces of one kind, in registration order.
    pub fn surfaces_of(&self, kind: SurfaceKind) -> impl Iterator<Item = (SurfaceId, &Surface)> + '_ {
        self.surfaces
            .iter()
            .filter(move |(_, surface)| surface.kind() == kind)
            .map(|(id, surface)| (*id, surface))
    }

    #[inline]
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Apply catalog material `index` to every registered surface of `kind`.
    ///
    /// Returns how many surfaces took the material. An out-of-range index is
    /// logged and returned as an error with no surface touched. A surface
    /// that refuses the material is logged and skipped.
    pub fn change_base_material(&mut self, kind: SurfaceKind, index: usize) -> Result<usize, CustomizationError> {
        let material = match self.catalog.get(kind, index) {
            Ok(material) => material,
            Err(err) => {
                log::error!("{err}");
                return Err(err);
            }
        };

        let mut applied = 0;
        for (id, surface) in self.surfaces.iter_mut() {
            if surface.kind() != kind {
                continue;
            }
            match surface.set_material(Some(material)) {
                Ok(()) => applied += 1,
                Err(err) => log::warn!("surface {id}: {err}"),
            }
        }

        log::info!(
            "'{}': {kind} material set to '{}' on {applied} surface(s)",
            self.name,
            material.name
        );
        Ok(applied)
    }

    /// Apply catalog material `index` to a single registered surface, using
    /// the catalog for that surface's kind.
    pub fn apply_to_surface(&mut self, id: SurfaceId, index: usize) -> Result<(), CustomizationError> {
        let surface = self
            .surfaces
            .get_mut(&id)
            .ok_or(CustomizationError::UnknownSurface(id))?;
        let material = self.catalog.get(surface.kind(), index)?;
        surface.set_material(Some(material))
    }
}
