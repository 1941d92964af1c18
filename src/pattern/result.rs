//! Canvas and finished pattern types

use crate::color::rgb::Rgb;
use crate::io::configuration::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::io::svg;
use crate::pattern::family::PatternFamily;
use crate::shape::primitive::{Paint, ShapePrimitive};
use std::fmt;

/// Output dimensions and the background painted behind every shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSpec {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
    /// Full-bounds background color
    pub background: Rgb,
}

impl CanvasSpec {
    /// Card-sized canvas over the given background
    pub const fn standard(background: Rgb) -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background,
        }
    }
}

/// A finished decorative image
///
/// Shapes are kept in draw order: later shapes paint over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternResult {
    canvas: CanvasSpec,
    family: PatternFamily,
    shapes: Vec<ShapePrimitive>,
    fallback: bool,
}

impl PatternResult {
    /// Assemble a synthesized pattern
    pub const fn new(
        canvas: CanvasSpec,
        family: PatternFamily,
        shapes: Vec<ShapePrimitive>,
    ) -> Self {
        Self {
            canvas,
            family,
            shapes,
            fallback: false,
        }
    }

    /// Assemble the minimal pattern used when synthesis fails
    pub const fn fallback(canvas: CanvasSpec, shapes: Vec<ShapePrimitive>) -> Self {
        Self {
            canvas,
            family: PatternFamily::Circles,
            shapes,
            fallback: true,
        }
    }

    /// Canvas dimensions and background
    pub const fn canvas(&self) -> &CanvasSpec {
        &self.canvas
    }

    /// Family that produced the shapes
    pub const fn family(&self) -> PatternFamily {
        self.family
    }

    /// Shapes in draw order
    pub const fn shapes(&self) -> &[ShapePrimitive] {
        self.shapes.as_slice()
    }

    /// Whether this is the fallback pattern
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Number of gradient-painted shapes
    pub fn gradient_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| matches!(s.paint, Paint::Gradient(_)))
            .count()
    }

    /// Serialize as an SVG document
    pub fn to_svg(&self) -> String {
        svg::render(self)
    }
}

impl fmt::Display for PatternResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}
