//! Composes decoded parameters into a 3x3 grid of patch tiles
//!
//! Tile order is fixed: middle, then the side ring clockwise from north, then
//! the corner ring clockwise from top-left. Within a ring every tile uses the
//! same patch, each turned one quarter further than the previous one.

use crate::encoding::decoder::{DecodedParameters, Decoder, PatchSelection, StandardLayout};
use crate::encoding::digest::Digest;
use crate::geometry::transform::{AffineMatrix, Point};
use crate::io::configuration::{GRID_CELLS, MAX_SURFACE_DIMENSION, ROTATION_PIVOT};
use crate::io::error::{Result, surface_error};
use crate::render::surface::{PixelRect, Surface};
use image::{Rgb, RgbImage};

/// Grid cell as `(column, row)`
pub type Cell = (u32, u32);

/// Centre cell
pub const MIDDLE_CELL: Cell = (1, 1);

/// Side cells clockwise from north
pub const SIDE_CELLS: [Cell; 4] = [(1, 0), (2, 1), (1, 2), (0, 1)];

/// Corner cells clockwise from top-left
pub const CORNER_CELLS: [Cell; 4] = [(0, 0), (2, 0), (2, 2), (0, 2)];

/// Quarter turns applied to the `position`-th tile of a ring
///
/// The base rotation is offset by one before the per-tile step is added.
pub const fn ring_rotation(base: u32, position: u32) -> u32 {
    (base + 1 + position) % 4
}

/// Transform from unit-tile space into pixel space for one cell
///
/// Rotates about the tile centre, moves into the cell, then scales to pixels.
pub fn tile_transform(cell: Cell, quarter_turns: u32, tile_size: u32) -> AffineMatrix {
    let size = f64::from(tile_size);
    AffineMatrix::rotate_step(quarter_turns, Some(Point::from(ROTATION_PIVOT)))
        * AffineMatrix::translate(f64::from(cell.0), f64::from(cell.1))
        * AffineMatrix::scale(size, size)
}

/// Pixel rectangle covered by `cell`
///
/// Shapes touching the far edge of a tile are clipped here so they never
/// paint into the neighbouring cell.
pub const fn cell_bounds(cell: Cell, tile_size: u32) -> PixelRect {
    PixelRect::new(cell.0 * tile_size, cell.1 * tile_size, tile_size, tile_size)
}

/// Edge length in pixels of an identicon built from `tile_size` tiles
///
/// # Errors
///
/// Returns an error if the tile size is zero or the surface would exceed
/// [`MAX_SURFACE_DIMENSION`]
pub fn surface_dimension(tile_size: u32) -> Result<u32> {
    let edge = u64::from(tile_size) * u64::from(GRID_CELLS);
    if tile_size == 0 {
        return Err(surface_error(edge, edge, &"tile size must be at least 1"));
    }
    u32::try_from(edge)
        .ok()
        .filter(|&dimension| dimension <= MAX_SURFACE_DIMENSION)
        .ok_or_else(|| {
            surface_error(
                edge,
                edge,
                &format!("edge exceeds the {MAX_SURFACE_DIMENSION} pixel limit"),
            )
        })
}

/// Renders identicons using a [`Decoder`] for parameters and patch shapes
#[derive(Debug, Clone, Default)]
pub struct Renderer<D = StandardLayout> {
    decoder: D,
}

impl<D: Decoder> Renderer<D> {
    /// Create a renderer around a decoder
    pub const fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// The decoder in use
    pub const fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Render `code` onto a fresh surface of `3 * tile_size` pixels square
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile size yields a degenerate or oversized surface (checked before allocation)
    /// - The decoder selects an index outside its catalog
    pub fn render<S: Surface>(&self, code: &str, tile_size: u32) -> Result<S> {
        let params = self.decoder.decode(&Digest::of(code));
        log::debug!("decoded {code:?}: {params:?}");
        self.render_parameters(&params, tile_size)
    }

    /// Render already decoded parameters
    ///
    /// # Errors
    ///
    /// Same conditions as [`Renderer::render`]
    pub fn render_parameters<S: Surface>(
        &self,
        params: &DecodedParameters,
        tile_size: u32,
    ) -> Result<S> {
        let edge = surface_dimension(tile_size)?;
        let mut surface = S::blank(edge, edge, params.back_color);

        self.draw_patch(&mut surface, MIDDLE_CELL, 0, &params.middle, params, tile_size)?;
        self.draw_ring(&mut surface, &SIDE_CELLS, &params.side, params, tile_size)?;
        self.draw_ring(&mut surface, &CORNER_CELLS, &params.corner, params, tile_size)?;

        Ok(surface)
    }

    fn draw_ring<S: Surface>(
        &self,
        surface: &mut S,
        cells: &[Cell; 4],
        selection: &PatchSelection,
        params: &DecodedParameters,
        tile_size: u32,
    ) -> Result<()> {
        for (position, &cell) in (0u32..).zip(cells) {
            let turns = ring_rotation(selection.rotation, position);
            self.draw_patch(surface, cell, turns, selection, params, tile_size)?;
        }
        Ok(())
    }

    fn draw_patch<S: Surface>(
        &self,
        surface: &mut S,
        cell: Cell,
        quarter_turns: u32,
        selection: &PatchSelection,
        params: &DecodedParameters,
        tile_size: u32,
    ) -> Result<()> {
        let patch = self.decoder.catalog().get(selection.index)?;
        let (outline, invert) = patch.resolve(selection.invert);
        let (fore, back): (Rgb<u8>, Rgb<u8>) = if invert {
            (params.back_color, params.fore_color)
        } else {
            (params.fore_color, params.back_color)
        };

        let transform = tile_transform(cell, quarter_turns, tile_size);
        let polygon: Vec<Point> = outline.iter().map(|&p| transform.apply(p)).collect();

        log::trace!(
            "patch {} at {cell:?}, {quarter_turns} turns, invert {invert}",
            selection.index
        );

        let bounds = cell_bounds(cell, tile_size);
        surface.fill_rect(bounds, back);
        surface.fill_polygon(&polygon, bounds, fore);
        Ok(())
    }
}

/// Render `code` with the standard layout into an RGB image
///
/// # Errors
///
/// Returns an error if the tile size yields a degenerate or oversized surface
pub fn render_identicon(code: &str, tile_size: u32) -> Result<RgbImage> {
    Renderer::new(StandardLayout::new()).render(code, tile_size)
}
