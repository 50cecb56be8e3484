//! Customizable Surfaces
//!
//! A [`Surface`] is one wall, floor or ceiling piece whose material can be
//! swapped at runtime. The renderer side is modelled by [`MaterialSlot`]; a
//! surface without one accepts no material.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::CustomizationError;

/// Category of environmental surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum SurfaceKind {
    Wall = 0,
    Ceiling = 1,
    Floor = 2,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 3] = [SurfaceKind::Wall, SurfaceKind::Ceiling, SurfaceKind::Floor];

    pub fn name(&self) -> &'static str {
        match self {
            SurfaceKind::Wall => "wall",
            SurfaceKind::Ceiling => "ceiling",
            SurfaceKind::Floor => "floor",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A selectable look for a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Base color (linear RGB, 0.0-1.0)
    #[serde(default = "default_albedo")]
    pub albedo: [f32; 3],
}

fn default_albedo() -> [f32; 3] {
    [0.8, 0.8, 0.8]
}

impl Material {
    pub fn new(name: impl Into<String>, albedo: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            albedo,
        }
    }
}

/// Renderer-side slot holding the material currently shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialSlot {
    material: Option<Material>,
}

impl MaterialSlot {
    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }
}

/// Handle returned when a surface is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub(crate) u32);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One customizable surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    kind: SurfaceKind,
    label: String,
    renderer: Option<MaterialSlot>,
}

impl Surface {
    /// Surface with an empty renderer slot.
    pub fn new(kind: SurfaceKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            renderer: Some(MaterialSlot::default()),
        }
    }

    /// Surface with nothing to render the material on.
    pub fn without_renderer(kind: SurfaceKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            renderer: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Material currently applied, if any.
    pub fn material(&self) -> Option<&Material> {
        self.renderer.as_ref().and_then(MaterialSlot::material)
    }

    /// Apply `material` to this surface's renderer.
    ///
    /// On error the surface is left unchanged.
    pub fn set_material(&mut self, material: Option<&Material>) -> Result<(), CustomizationError> {
        let material = material.ok_or(CustomizationError::NullMaterial)?;
        let slot = self
            .renderer
            .as_mut()
            .ok_or_else(|| CustomizationError::MissingRenderer {
                kind: self.kind,
                label: self.label.clone(),
            })?;
        slot.material = Some(material.clone());
        Ok(())
    }
}
