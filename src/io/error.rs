//! Error types for identicon rendering, export and display

use std::fmt;
use std::path::PathBuf;

/// Main error type for all identicon operations
#[derive(Debug)]
pub enum IdenticonError {
    /// Requested surface is degenerate or too large to allocate
    ///
    /// Raised before any pixel buffer exists, so no partial image escapes.
    SurfaceAllocation {
        /// Requested width in pixels
        width: u64,
        /// Requested height in pixels
        height: u64,
        /// Explanation of why the surface was rejected
        reason: String,
    },

    /// Patch index exceeds the catalog
    InvalidPatchIndex {
        /// The invalid patch index
        index: usize,
        /// Number of patches in the catalog
        catalog_len: usize,
    },

    /// Patch catalog doesn't meet layout requirements
    MalformedCatalog {
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// Failed to save rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The platform image viewer could not be launched
    Display {
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for IdenticonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceAllocation {
                width,
                height,
                reason,
            } => {
                write!(f, "Cannot allocate {width}x{height} surface: {reason}")
            }
            Self::InvalidPatchIndex { index, catalog_len } => {
                write!(
                    f,
                    "Patch index {index} is out of bounds (catalog has {catalog_len} patches)"
                )
            }
            Self::MalformedCatalog { reason } => {
                write!(f, "Malformed patch catalog: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Display { reason } => {
                write!(f, "Failed to display image: {reason}")
            }
        }
    }
}

impl std::error::Error for IdenticonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for identicon results
pub type Result<T> = std::result::Result<T, IdenticonError>;

/// Create a surface allocation error
pub fn surface_error(width: u64, height: u64, reason: &impl ToString) -> IdenticonError {
    IdenticonError::SurfaceAllocation {
        width,
        height,
        reason: reason.to_string(),
    }
}

/// Create a malformed catalog error
pub fn catalog_error(reason: &impl ToString) -> IdenticonError {
    IdenticonError::MalformedCatalog {
        reason: reason.to_string(),
    }
}
