//! Geometry for tile composition
//!
//! This module contains:
//! - Quarter-turn affine transforms
//! - Patch polygons and the patch catalog

/// Patch polygons and catalog
pub mod patch;
/// Affine matrices and points
pub mod transform;

pub use patch::{Patch, PatchCatalog};
pub use transform::{AffineMatrix, Point};
