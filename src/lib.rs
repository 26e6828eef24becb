//! Deterministic identicons: a string is hashed, the digest is unpacked into
//! patch and colour choices, and those choices are drawn as a 3x3 grid of
//! rotated geometric tiles.
//!
//! The same input always yields the same image.

#![forbid(unsafe_code)]

/// Input hashing and digest-to-parameter decoding
pub mod encoding;
/// Affine transforms and the patch shape catalog
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;
/// Drawing surfaces and the tile renderer
pub mod render;

pub use io::error::{IdenticonError, Result};
pub use render::renderer::{Renderer, render_identicon};
