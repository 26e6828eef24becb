//! Tests for quarter-turn affine transforms and their composition order

#[cfg(test)]
mod tests {
    use identicon::geometry::transform::{AffineMatrix, Point};

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < 1e-12 && (actual.y - y).abs() < 1e-12,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    // Tests identity leaves points unchanged
    // Verified by putting a 2 on the identity diagonal
    #[test]
    fn test_identity() {
        let p = AffineMatrix::identity().apply(Point::new(3.5, -2.0));
        assert_point(p, 3.5, -2.0);
        assert_eq!(AffineMatrix::default(), AffineMatrix::identity());
    }

    // Tests translation and scaling act on points independently per axis
    // Verified by swapping the scale factors
    #[test]
    fn test_translate_and_scale() {
        assert_point(
            AffineMatrix::translate(2.0, -1.0).apply(Point::new(1.0, 1.0)),
            3.0,
            0.0,
        );
        assert_point(
            AffineMatrix::scale(2.0, 3.0).apply(Point::new(1.0, 1.0)),
            2.0,
            3.0,
        );
    }

    // Tests the four quarter-turn matrices are exact
    // Verified by computing rotations with sin/cos of multiples of pi/2
    #[test]
    fn test_rotation_is_exact() {
        assert_eq!(
            AffineMatrix::rotation(1).rows(),
            [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]
        );
        assert_eq!(
            AffineMatrix::rotation(2).rows(),
            [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]
        );
        assert_eq!(AffineMatrix::rotation(0), AffineMatrix::identity());
        assert_eq!(AffineMatrix::rotation(5), AffineMatrix::rotation(1));
        assert_eq!(AffineMatrix::rotation(7), AffineMatrix::rotation(3));
    }

    // Tests one quarter turn maps +x onto +y
    // Verified by negating the sine term
    #[test]
    fn test_rotation_direction() {
        assert_point(AffineMatrix::rotation(1).apply(Point::new(1.0, 0.0)), 0.0, 1.0);
        assert_point(AffineMatrix::rotation(3).apply(Point::new(1.0, 0.0)), 0.0, -1.0);
    }

    // Tests rotation about the tile centre keeps the unit square in place
    // Verified by composing the pivot translations in reverse order
    #[test]
    fn test_rotate_step_about_pivot() {
        let turn = AffineMatrix::rotate_step(1, Some(Point::new(0.5, 0.5)));
        assert_point(turn.apply(Point::new(0.0, 0.0)), 1.0, 0.0);
        assert_point(turn.apply(Point::new(1.0, 0.0)), 1.0, 1.0);
        assert_point(turn.apply(Point::new(0.5, 0.5)), 0.5, 0.5);
        assert_point(turn.apply(Point::new(0.25, 0.0)), 1.0, 0.25);

        let half = AffineMatrix::rotate_step(2, Some(Point::new(0.5, 0.5)));
        assert_point(half.apply(Point::new(0.0, 0.0)), 1.0, 1.0);
    }

    // Tests rotation without a pivot turns about the origin
    // Verified by defaulting the pivot to the tile centre
    #[test]
    fn test_rotate_step_without_pivot() {
        assert_eq!(
            AffineMatrix::rotate_step(1, None),
            AffineMatrix::rotation(1)
        );
    }

    // Tests composition applies the left operand first
    // Verified by swapping the operands inside compose
    #[test]
    fn test_compose_order() {
        let translate = AffineMatrix::translate(1.0, 0.0);
        let scale = AffineMatrix::scale(2.0, 2.0);
        let origin = Point::new(0.0, 0.0);

        assert_point(translate.compose(&scale).apply(origin), 2.0, 0.0);
        assert_point(scale.compose(&translate).apply(origin), 1.0, 0.0);
        assert_ne!(translate * scale, scale * translate);
        assert_eq!(translate * scale, translate.compose(&scale));
    }

    // Tests composition is associative
    // Verified by dropping the translation column from the product
    #[test]
    fn test_compose_associative() {
        let a = AffineMatrix::rotate_step(1, Some(Point::new(0.5, 0.5)));
        let b = AffineMatrix::translate(2.0, 1.0);
        let c = AffineMatrix::scale(8.0, 8.0);
        assert_eq!((a * b) * c, a * (b * c));
    }

    // Tests the tile pipeline rotates, then moves into the cell, then scales
    // Verified by scaling before translating
    #[test]
    fn test_tile_pipeline() {
        let matrix = AffineMatrix::rotate_step(1, Some(Point::new(0.5, 0.5)))
            * AffineMatrix::translate(2.0, 1.0)
            * AffineMatrix::scale(8.0, 8.0);
        assert_point(matrix.apply(Point::new(0.0, 0.0)), 24.0, 8.0);
        assert_point(matrix.apply(Point::new(0.0, 1.0)), 16.0, 8.0);
    }

    // Tests projection to six drawing coefficients
    // Verified by returning the coefficients column-major
    #[test]
    fn test_to_drawable() {
        assert_eq!(
            AffineMatrix::translate(3.0, 4.0).to_drawable(),
            [1.0, 0.0, 3.0, 0.0, 1.0, 4.0]
        );
        assert_eq!(
            AffineMatrix::scale(2.0, 5.0).to_drawable(),
            [2.0, 0.0, 0.0, 0.0, 5.0, 0.0]
        );
    }

    // Tests tuple conversion into points
    // Verified by swapping the tuple fields
    #[test]
    fn test_point_from_tuple() {
        assert_eq!(Point::from((0.5, 0.25)), Point::new(0.5, 0.25));
    }
}
