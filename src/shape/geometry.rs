//! Point math for polygons, stars and spirals

use std::f64::consts::{PI, TAU};

/// A position on the canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle` (radians)
    pub fn polar(self, radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(radius.mul_add(cos, self.x), radius.mul_add(sin, self.y))
    }

    /// Whether both coordinates are finite
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounds of a shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Top-left corner
    pub min: Point,
    /// Bottom-right corner
    pub max: Point,
}

impl Bounds {
    /// Smallest box containing all points, `None` when there are none
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min: *first,
            max: *first,
        };
        Some(points.iter().fold(init, |acc, p| Self {
            min: Point::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Point::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        }))
    }

    /// Whether the box overlaps the rectangle `[0, width] x [0, height]`
    pub fn intersects_canvas(&self, width: f64, height: f64) -> bool {
        self.max.x >= 0.0 && self.max.y >= 0.0 && self.min.x <= width && self.min.y <= height
    }
}

/// Vertices of a regular polygon, first vertex at `rotation`
pub fn regular_polygon(center: Point, radius: f64, sides: usize, rotation: f64) -> Vec<Point> {
    let sides = sides.max(3);
    (0..sides)
        .map(|i| center.polar(radius, rotation + TAU * i as f64 / sides as f64))
        .collect()
}

/// Alternating outer and inner vertices of a star
pub fn star(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    tips: usize,
    rotation: f64,
) -> Vec<Point> {
    let tips = tips.max(2);
    (0..tips * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            center.polar(radius, rotation + PI * i as f64 / tips as f64)
        })
        .collect()
}

/// Diamond (square rotated 45°) whose diagonals measure `size`
pub fn diamond(center: Point, size: f64) -> Vec<Point> {
    let half = size / 2.0;
    vec![
        Point::new(center.x, center.y - half),
        Point::new(center.x + half, center.y),
        Point::new(center.x, center.y + half),
        Point::new(center.x - half, center.y),
    ]
}

/// Square of side `2 * half` rotated by `angle` around its center
pub fn rotated_square(center: Point, half: f64, angle: f64) -> Vec<Point> {
    // Corners sit on the circumscribed circle, 45° off the edges
    regular_polygon(center, half * std::f64::consts::SQRT_2, 4, angle + PI / 4.0)
}

/// Archimedean spiral winding outward from `center`
pub fn spiral(center: Point, max_radius: f64, turns: f64, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            center.polar(t * max_radius, t * turns * TAU)
        })
        .collect()
}

/// Spiral that travels from `start` to `end` while winding
pub fn spiral_between(start: Point, end: Point, turns: f64, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let distance = dx.hypot(dy);
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let along = Point::new(t.mul_add(dx, start.x), t.mul_add(dy, start.y));
            along.polar(t * distance * 0.3, t * turns * TAU)
        })
        .collect()
}
