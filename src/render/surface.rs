//! Minimal drawing surface the renderer paints through
//!
//! The renderer only ever creates a surface, fills axis-aligned rectangles
//! and fills closed polygons clipped to a tile. [`RgbImage`] implements these
//! with `imageproc`.

use crate::geometry::transform::Point;
use image::{Rgb, RgbImage};
use imageproc::drawing::{Canvas, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point as PixelPoint;
use imageproc::rect::Rect;

/// Axis-aligned pixel rectangle, half-open on its far edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl PixelRect {
    /// Rectangle with top-left `(x, y)` and the given size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether pixel `(x, y)` lies inside the rectangle
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x - self.x < self.width && y >= self.y && y - self.y < self.height
    }
}

/// Raster target for identicon tiles
pub trait Surface: Sized {
    /// Create a `width` x `height` surface filled with `background`
    ///
    /// Dimensions are validated by the caller before this is reached.
    fn blank(width: u32, height: u32, background: Rgb<u8>) -> Self;

    /// Fill exactly the pixels of `rect`
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb<u8>);

    /// Fill and outline a closed polygon given in pixel coordinates
    ///
    /// Only pixels inside `clip` are painted.
    fn fill_polygon(&mut self, points: &[Point], clip: PixelRect, color: Rgb<u8>);
}

impl Surface for RgbImage {
    fn blank(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self::from_pixel(width, height, background)
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb<u8>) {
        if rect.is_empty() {
            return;
        }
        // Origins past i32::MAX are off any surface we can allocate
        let (Ok(x), Ok(y)) = (i32::try_from(rect.x), i32::try_from(rect.y)) else {
            return;
        };
        draw_filled_rect_mut(self, Rect::at(x, y).of_size(rect.width, rect.height), color);
    }

    fn fill_polygon(&mut self, points: &[Point], clip: PixelRect, color: Rgb<u8>) {
        let vertices = pixel_vertices(points);
        let mut canvas = Clipped { image: self, clip };

        match vertices.as_slice() {
            [] => {}
            [single] => {
                if let (Ok(x), Ok(y)) = (u32::try_from(single.x), u32::try_from(single.y)) {
                    canvas.draw_pixel(x, y, color);
                }
            }
            _ => {
                draw_polygon_mut(&mut canvas, &vertices, color);
                for (start, end) in vertices.iter().zip(vertices.iter().cycle().skip(1)) {
                    draw_line_segment_mut(
                        &mut canvas,
                        (start.x as f32, start.y as f32),
                        (end.x as f32, end.y as f32),
                        color,
                    );
                }
            }
        }
    }
}

/// Canvas view of an image that drops writes outside `clip`
struct Clipped<'a> {
    image: &'a mut RgbImage,
    clip: PixelRect,
}

impl Canvas for Clipped<'_> {
    type Pixel = Rgb<u8>;

    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Self::Pixel {
        *self.image.get_pixel(x, y)
    }

    fn draw_pixel(&mut self, x: u32, y: u32, color: Self::Pixel) {
        if self.clip.contains(x, y) && x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }
}

/// Round to pixel vertices, dropping repeats and the closing vertex
///
/// `imageproc` rejects polygons whose first and last vertices coincide.
/// Float to int casts saturate; tile geometry stays within the
/// 8192 pixel surface limit checked by `surface_dimension`.
fn pixel_vertices(points: &[Point]) -> Vec<PixelPoint<i32>> {
    let mut vertices: Vec<PixelPoint<i32>> = Vec::with_capacity(points.len());
    for point in points {
        let vertex = PixelPoint::new(point.x.round() as i32, point.y.round() as i32);
        if vertices.last() != Some(&vertex) {
            vertices.push(vertex);
        }
    }
    while vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    vertices
}
