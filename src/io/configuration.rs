//! Rendering constants and runtime configuration defaults

/// Default tile edge length in pixels
pub const DEFAULT_TILE_SIZE: u32 = 24;

/// Number of tiles along each edge of the identicon
pub const GRID_CELLS: u32 = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed surface edge length in pixels
pub const MAX_SURFACE_DIMENSION: u32 = 8192;

/// Resolution of the integer grid the patch shapes are authored on
pub const PATCH_GRID_UNITS: f64 = 4.0;

/// Rotation pivot in unit-tile coordinates (tile centre)
pub const ROTATION_PIVOT: (f64, f64) = (0.5, 0.5);

/// Background colour shared by every identicon
pub const BACKGROUND_RGB: [u8; 3] = [255, 255, 255];

// Output settings
/// Extension of saved identicons
pub const OUTPUT_EXTENSION: &str = "png";
/// Prefix of the temporary file handed to the image viewer
pub const PREVIEW_PREFIX: &str = "identicon_preview_";
