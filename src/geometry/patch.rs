//! Patch shapes and the catalog the decoder selects from
//!
//! Shapes are authored on a 4x4 integer grid and normalised once, on first
//! use, into closed polygons on the unit square.

use crate::geometry::transform::Point;
use crate::io::configuration::PATCH_GRID_UNITS;
use crate::io::error::{IdenticonError, Result, catalog_error};
use std::sync::LazyLock;

/// Number of patches a catalog must hold
pub const CATALOG_SIZE: usize = 16;

/// Number of patches eligible for the middle tile
pub const MIDDLE_ELIGIBLE_COUNT: usize = 4;

/// Closed unit square drawn in place of a blank patch
pub static FULL_SQUARE: [Point; 5] = [
    Point::new(0.0, 0.0),
    Point::new(1.0, 0.0),
    Point::new(1.0, 1.0),
    Point::new(0.0, 1.0),
    Point::new(0.0, 0.0),
];

/// Standard shapes on the 4x4 authoring grid; the empty entry is the blank patch
pub const STANDARD_SHAPES: [&[(u8, u8)]; CATALOG_SIZE] = [
    &[(0, 0), (4, 0), (4, 4), (0, 4)],
    &[(0, 0), (4, 0), (0, 4)],
    &[(2, 0), (4, 4), (0, 4)],
    &[(0, 0), (2, 0), (2, 4), (0, 4)],
    &[(2, 0), (4, 2), (2, 4), (0, 2)],
    &[(0, 0), (4, 2), (4, 4), (2, 4)],
    &[(2, 0), (4, 4), (2, 4), (3, 2), (1, 2), (2, 4), (0, 4)],
    &[(0, 0), (4, 2), (2, 4)],
    &[(1, 1), (3, 1), (3, 3), (1, 3)],
    &[(2, 0), (4, 0), (0, 4), (0, 2), (2, 2)],
    &[(0, 0), (2, 0), (2, 2), (0, 2)],
    &[(0, 2), (4, 2), (2, 4)],
    &[(2, 2), (4, 4), (0, 4)],
    &[(2, 0), (2, 2), (0, 2)],
    &[(0, 0), (2, 0), (0, 2)],
    &[],
];

/// Catalog indices allowed in the middle tile: full square, diamond, inset square, blank
pub const STANDARD_MIDDLE_ELIGIBLE: [usize; MIDDLE_ELIGIBLE_COUNT] = [0, 4, 8, 15];

static STANDARD_CATALOG: LazyLock<PatchCatalog> = LazyLock::new(|| PatchCatalog {
    patches: STANDARD_SHAPES.iter().map(|shape| Patch::from_grid(shape)).collect(),
    middle_eligible: STANDARD_MIDDLE_ELIGIBLE,
});

/// A closed polygon on the unit square
///
/// An empty patch is the blank patch: it renders as the full tile with its
/// invert flag flipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Patch {
    points: Vec<Point>,
}

impl Patch {
    /// Normalise a shape authored on the 4x4 grid and close it
    pub fn from_grid(shape: &[(u8, u8)]) -> Self {
        let mut points: Vec<Point> = shape
            .iter()
            .map(|&(x, y)| {
                Point::new(f64::from(x) / PATCH_GRID_UNITS, f64::from(y) / PATCH_GRID_UNITS)
            })
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        Self { points }
    }

    /// Wrap unit-square points, closing the polygon if needed
    pub fn from_points(mut points: Vec<Point>) -> Self {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                points.push(first);
            }
        }
        Self { points }
    }

    /// Test whether this is the blank patch
    pub fn is_blank(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed polygon vertices (empty for the blank patch)
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Polygon to draw and the effective invert flag
    ///
    /// The blank patch resolves to [`FULL_SQUARE`] with `invert` flipped, so an
    /// uninverted blank tile ends up entirely in the background colour.
    pub fn resolve(&self, invert: bool) -> (&[Point], bool) {
        if self.is_blank() {
            (FULL_SQUARE.as_slice(), !invert)
        } else {
            (self.points.as_slice(), invert)
        }
    }
}

/// Fixed-size, ordered set of patches with a middle-eligible lookup table
#[derive(Debug, Clone, PartialEq)]
pub struct PatchCatalog {
    patches: Vec<Patch>,
    middle_eligible: [usize; MIDDLE_ELIGIBLE_COUNT],
}

impl PatchCatalog {
    /// Validate and build a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog does not hold exactly [`CATALOG_SIZE`] patches
    /// - A middle-eligible index points outside the catalog
    pub fn new(
        patches: Vec<Patch>,
        middle_eligible: [usize; MIDDLE_ELIGIBLE_COUNT],
    ) -> Result<Self> {
        if patches.len() != CATALOG_SIZE {
            return Err(catalog_error(&format!(
                "expected {CATALOG_SIZE} patches, found {}",
                patches.len()
            )));
        }
        if let Some(index) = middle_eligible.iter().find(|&&index| index >= patches.len()) {
            return Err(catalog_error(&format!(
                "middle-eligible index {index} is outside the catalog"
            )));
        }

        Ok(Self {
            patches,
            middle_eligible,
        })
    }

    /// The built-in catalog of 16 shapes
    pub fn standard() -> &'static Self {
        &STANDARD_CATALOG
    }

    /// Look up a patch by catalog index
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is outside the catalog
    pub fn get(&self, index: usize) -> Result<&Patch> {
        self.patches
            .get(index)
            .ok_or(IdenticonError::InvalidPatchIndex {
                index,
                catalog_len: self.patches.len(),
            })
    }

    /// Catalog index for a 2-bit middle selector (upper bits are ignored)
    pub fn middle_index(&self, selector: u32) -> usize {
        self.middle_eligible
            .get((selector & 0b11) as usize)
            .copied()
            .unwrap_or_default()
    }

    /// Catalog indices eligible for the middle tile
    pub const fn middle_eligible(&self) -> &[usize; MIDDLE_ELIGIBLE_COUNT] {
        &self.middle_eligible
    }

    /// Number of patches
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Test if the catalog holds no patches
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}
