//! Surface abstraction and the identicon tile renderer

/// Tile layout and the render pipeline
pub mod renderer;
/// Drawing surface trait and its `image` implementation
pub mod surface;

pub use surface::{PixelRect, Surface};
