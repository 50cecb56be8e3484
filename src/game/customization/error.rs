//! Customization errors.

use thiserror::Error;

use super::surface::{SurfaceId, SurfaceKind};

/// Failures while applying restaurant materials.
///
/// None of these are fatal: callers log them and carry on with the
/// affected surface left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomizationError {
    #[error("attempted to set a null material")]
    NullMaterial,

    #[error("no renderer on {kind} surface '{label}'")]
    MissingRenderer { kind: SurfaceKind, label: String },

    #[error("invalid {kind} material index {index} ({available} available)")]
    InvalidMaterialIndex {
        kind: SurfaceKind,
        index: usize,
        available: usize,
    },

    #[error("unknown surface {0}")]
    UnknownSurface(SurfaceId),
}
