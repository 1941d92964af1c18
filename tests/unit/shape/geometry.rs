//! Tests for polygon, star and spiral point generation

#[cfg(test)]
mod tests {
    use svgpattern::shape::geometry::{
        Bounds, Point, diamond, regular_polygon, rotated_square, spiral, spiral_between, star,
    };

    fn distance(a: Point, b: Point) -> f64 {
        (a.x - b.x).hypot(a.y - b.y)
    }

    // Tests polar offsets land at the requested radius
    // Verified by swapping sine and cosine
    #[test]
    fn test_polar() {
        let p = Point::new(1.0, 2.0).polar(3.0, 0.0);
        assert!((p.x - 4.0).abs() < 1e-9);
        assert!((p.y - 2.0).abs() < 1e-9);
    }

    // Tests polygon vertices are equidistant from the center
    // Verified by scaling alternate vertices
    #[test]
    fn test_regular_polygon() {
        let center = Point::new(10.0, 10.0);
        let points = regular_polygon(center, 5.0, 6, 0.3);
        assert_eq!(points.len(), 6);
        assert!(points.iter().all(|&p| (distance(p, center) - 5.0).abs() < 1e-9));
    }

    // Tests degenerate side counts are raised to a triangle
    // Verified by allowing two-sided polygons
    #[test]
    fn test_regular_polygon_minimum_sides() {
        assert_eq!(regular_polygon(Point::new(0.0, 0.0), 1.0, 1, 0.0).len(), 3);
    }

    // Tests stars alternate outer and inner radii
    // Verified by using the outer radius for every vertex
    #[test]
    fn test_star_alternates() {
        let center = Point::new(0.0, 0.0);
        let points = star(center, 10.0, 4.0, 5, 0.0);
        assert_eq!(points.len(), 10);
        for (i, &p) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
            assert!((distance(p, center) - expected).abs() < 1e-9);
        }
    }

    // Tests diamond corners lie on the axes through the center
    // Verified by using the full size as half-diagonal
    #[test]
    fn test_diamond() {
        let points = diamond(Point::new(5.0, 5.0), 4.0);
        assert_eq!(
            points,
            vec![
                Point::new(5.0, 3.0),
                Point::new(7.0, 5.0),
                Point::new(5.0, 7.0),
                Point::new(3.0, 5.0),
            ]
        );
    }

    // Tests unrotated squares are axis-aligned
    // Verified by dropping the 45 degree offset
    #[test]
    fn test_rotated_square_axis_aligned() {
        let points = rotated_square(Point::new(0.0, 0.0), 2.0, 0.0);
        assert_eq!(points.len(), 4);
        for p in points {
            assert!((p.x.abs() - 2.0).abs() < 1e-9);
            assert!((p.y.abs() - 2.0).abs() < 1e-9);
        }
    }

    // Tests spirals start at the center and end at the maximum radius
    // Verified by sampling steps points instead of steps + 1
    #[test]
    fn test_spiral_endpoints() {
        let center = Point::new(50.0, 50.0);
        let points = spiral(center, 20.0, 3.0, 10);
        assert_eq!(points.len(), 11);
        assert!(distance(points[0], center) < 1e-9);
        assert!((distance(points[10], center) - 20.0).abs() < 1e-9);
    }

    // Tests spirals between two points start at the first point
    // Verified by starting from the end point
    #[test]
    fn test_spiral_between_starts_at_start() {
        let start = Point::new(1.0, 1.0);
        let points = spiral_between(start, Point::new(30.0, 5.0), 3.0, 20);
        assert_eq!(points.len(), 21);
        assert!(distance(points[0], start) < 1e-9);
    }

    // Tests bounds enclose every point and detect canvas overlap
    // Verified by swapping min and max
    #[test]
    fn test_bounds() {
        assert!(Bounds::enclosing(&[]).is_none());

        let bounds =
            Bounds::enclosing(&[Point::new(-5.0, 2.0), Point::new(3.0, -1.0)]).unwrap();
        assert_eq!(bounds.min, Point::new(-5.0, -1.0));
        assert_eq!(bounds.max, Point::new(3.0, 2.0));
        assert!(bounds.intersects_canvas(10.0, 10.0));

        let outside = Bounds::enclosing(&[Point::new(20.0, 20.0)]).unwrap();
        assert!(!outside.intersects_canvas(10.0, 10.0));
    }
}
