//! Affine transforms restricted to translation, axis scaling and quarter turns
//!
//! Matrices are immutable 3x3 homogeneous values. [`AffineMatrix::compose`]
//! reads left to right in application order, so the tile pipeline
//! `rotate * translate * scale` rotates first and scales last.

use std::ops::Mul;

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate (grows downwards on a raster surface)
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Row-major 3x3 matrix interpreted as a 2D affine map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    rows: [[f64; 3]; 3],
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineMatrix {
    /// Build a matrix from its nine row-major values
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Multiplicative identity
    pub const fn identity() -> Self {
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Pure translation by `(dx, dy)`
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self::from_rows([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
    }

    /// Pure scaling by `(sx, sy)` about the origin
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::from_rows([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation by `quarter_turns * 90°` about the origin
    ///
    /// Cosine and sine come from the exact set {1, 0, -1}, so the four
    /// distinct rotations carry no floating-point error.
    pub const fn rotation(quarter_turns: u32) -> Self {
        let (c, s) = match quarter_turns % 4 {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            2 => (-1.0, 0.0),
            _ => (0.0, -1.0),
        };
        Self::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation by `quarter_turns * 90°` about `pivot`, or the origin when `None`
    pub fn rotate_step(quarter_turns: u32, pivot: Option<Point>) -> Self {
        let rotation = Self::rotation(quarter_turns);
        match pivot {
            Some(p) => Self::translate(-p.x, -p.y) * rotation * Self::translate(p.x, p.y),
            None => rotation,
        }
    }

    /// Matrix that applies `self` and then `next`
    ///
    /// Associative but not commutative.
    #[must_use]
    pub fn compose(&self, next: &Self) -> Self {
        let columns = self.columns();
        Self {
            rows: next.rows.map(|row| columns.map(|column| dot(row, column))),
        }
    }

    /// Map a point through the transform
    pub fn apply(&self, point: Point) -> Point {
        let [[a, b, c], [d, e, f], _] = self.rows;
        Point::new(
            a.mul_add(point.x, b.mul_add(point.y, c)),
            d.mul_add(point.x, e.mul_add(point.y, f)),
        )
    }

    /// The six coefficients `[a, b, c, d, e, f]` a 2D drawing primitive expects
    ///
    /// `x' = a*x + b*y + c` and `y' = d*x + e*y + f`; the constant last row is dropped.
    pub const fn to_drawable(&self) -> [f64; 6] {
        let [[a, b, c], [d, e, f], _] = self.rows;
        [a, b, c, d, e, f]
    }

    /// Row-major values
    pub const fn rows(&self) -> [[f64; 3]; 3] {
        self.rows
    }

    const fn columns(&self) -> [[f64; 3]; 3] {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows;
        [[a, d, g], [b, e, h], [c, f, i]]
    }
}

impl Mul for AffineMatrix {
    type Output = Self;

    fn mul(self, next: Self) -> Self {
        self.compose(&next)
    }
}

fn dot(row: [f64; 3], column: [f64; 3]) -> f64 {
    row.iter().zip(column).map(|(a, b)| a * b).sum()
}
