//! Drawable shape primitives and their paint

use crate::color::rgb::Rgb;
use crate::color::weights::ColorWeight;
use crate::io::error::{Result, computation_error};
use crate::shape::geometry::{Bounds, Point};

/// Gradient interpolation style
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientKind {
    /// Centered radial gradient
    Radial,
    /// Diagonal linear gradient, top-left to bottom-right
    Linear,
}

/// One color stop of a gradient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`
    pub offset: f64,
    /// Stop color
    pub color: Rgb,
    /// Stop opacity in `[0, 1]`
    pub opacity: f64,
}

/// Two-stop gradient used in place of a flat fill
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    /// Interpolation style
    pub kind: GradientKind,
    /// Inner (radial) or starting (linear) stop
    pub from: GradientStop,
    /// Outer (radial) or ending (linear) stop
    pub to: GradientStop,
}

impl Gradient {
    /// Gradient fading from `from` to `to`, the outer stop scaled by `fade`
    pub fn fading(kind: GradientKind, from: ColorWeight, to: Rgb, fade: f64) -> Self {
        Self {
            kind,
            from: GradientStop {
                offset: 0.0,
                color: from.color,
                opacity: from.opacity,
            },
            to: GradientStop {
                offset: 1.0,
                color: to,
                opacity: (from.opacity * fade).clamp(0.0, 1.0),
            },
        }
    }
}

/// How a shape is painted
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Flat fill
    Fill(Rgb),
    /// Outline only
    Stroke {
        /// Stroke color
        color: Rgb,
        /// Stroke width in pixels
        width: f64,
    },
    /// Gradient fill, emitted as a definition referenced by id
    Gradient(Gradient),
}

impl Paint {
    /// The color a viewer perceives first: the fill, the stroke, or the
    /// gradient's starting stop
    pub const fn base_color(&self) -> Rgb {
        match self {
            Self::Fill(color) | Self::Stroke { color, .. } => *color,
            Self::Gradient(gradient) => gradient.from.color,
        }
    }
}

/// Shape geometry
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// Circle from center and radius
    Circle {
        /// Center point
        center: Point,
        /// Radius in pixels
        radius: f64,
    },
    /// Closed polygon through the given vertices
    Polygon {
        /// Vertices in drawing order
        points: Vec<Point>,
    },
    /// Open polyline path
    Path {
        /// Path vertices in drawing order
        points: Vec<Point>,
    },
}

/// One drawable element of a pattern
#[derive(Clone, Debug, PartialEq)]
pub struct ShapePrimitive {
    /// Position and size
    pub geometry: Geometry,
    /// Fill, stroke or gradient
    pub paint: Paint,
    /// Element opacity in `[0, 1]`
    pub opacity: f64,
}

impl ShapePrimitive {
    /// Filled circle
    pub fn circle(center: Point, radius: f64, weight: ColorWeight) -> Self {
        Self {
            geometry: Geometry::Circle { center, radius },
            paint: Paint::Fill(weight.color),
            opacity: weight.opacity,
        }
    }

    /// Stroked circle outline
    pub fn ring(center: Point, radius: f64, stroke_width: f64, weight: ColorWeight) -> Self {
        Self {
            geometry: Geometry::Circle { center, radius },
            paint: Paint::Stroke {
                color: weight.color,
                width: stroke_width,
            },
            opacity: weight.opacity,
        }
    }

    /// Filled polygon
    pub fn polygon(points: Vec<Point>, weight: ColorWeight) -> Self {
        Self {
            geometry: Geometry::Polygon { points },
            paint: Paint::Fill(weight.color),
            opacity: weight.opacity,
        }
    }

    /// Stroked open path
    pub fn path(points: Vec<Point>, stroke_width: f64, weight: ColorWeight) -> Self {
        Self {
            geometry: Geometry::Path { points },
            paint: Paint::Stroke {
                color: weight.color,
                width: stroke_width,
            },
            opacity: weight.opacity,
        }
    }

    /// Replace the paint with a gradient, keeping geometry and opacity
    #[must_use]
    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.paint = Paint::Gradient(gradient);
        self
    }

    /// Bounding box including radius for circles
    pub fn bounds(&self) -> Option<Bounds> {
        match &self.geometry {
            Geometry::Circle { center, radius } => Some(Bounds {
                min: Point::new(center.x - radius, center.y - radius),
                max: Point::new(center.x + radius, center.y + radius),
            }),
            Geometry::Polygon { points } | Geometry::Path { points } => Bounds::enclosing(points),
        }
    }

    /// Whether every coordinate, size and opacity is finite
    pub fn is_finite(&self) -> bool {
        let geometry_ok = match &self.geometry {
            Geometry::Circle { center, radius } => center.is_finite() && radius.is_finite(),
            Geometry::Polygon { points } | Geometry::Path { points } => {
                !points.is_empty() && points.iter().all(|p| p.is_finite())
            }
        };
        let paint_ok = match self.paint {
            Paint::Stroke { width, .. } => width.is_finite(),
            Paint::Fill(_) | Paint::Gradient(_) => true,
        };
        geometry_ok && paint_ok && self.opacity.is_finite()
    }

    /// Reject shapes with non-finite geometry or out-of-range opacity
    ///
    /// # Errors
    ///
    /// Returns a computation error describing the first problem found
    pub fn validate(&self) -> Result<()> {
        if !self.is_finite() {
            return Err(computation_error("shape geometry", &"non-finite value"));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(computation_error(
                "shape opacity",
                &format!("{} outside [0, 1]", self.opacity),
            ));
        }
        Ok(())
    }
}
