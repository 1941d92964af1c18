//! Grid-based families covering the whole canvas

use crate::io::configuration::{GRADIENT_FADE, GRADIENT_ONE_IN};
use crate::pattern::family::SynthesisContext;
use crate::shape::geometry::{self, Point};
use crate::shape::primitive::{Gradient, GradientKind, ShapePrimitive};

/// One shape per grid cell of 20 to 35 pixels
///
/// Cells hold a regular polygon, a star, a diamond with a center dot, or a
/// hexagon.
pub fn tessellation(ctx: &mut SynthesisContext<'_>) -> Vec<ShapePrimitive> {
    let cell = ctx.rng.int_inclusive(20, 35) as f64;
    let cols = SynthesisContext::cells_covering(ctx.canvas.width, cell);
    let rows = SynthesisContext::cells_covering(ctx.canvas.height, cell);
    let mut shapes = Vec::with_capacity(cols * rows);

    for row in 0..rows {
        for col in 0..cols {
            let middle = Point::new(
                (col as f64).mul_add(cell, cell / 2.0),
                (row as f64).mul_add(cell, cell / 2.0),
            );
            let weight = ctx.colors.pick(ctx.rng);

            match ctx.rng.int_inclusive(0, 3) {
                0 => {
                    let sides = ctx.rng.int_inclusive(5, 8);
                    let points = geometry::regular_polygon(middle, cell * 0.4, sides, 0.0);
                    shapes.push(ShapePrimitive::polygon(points, weight));
                }
                1 => {
                    let tips = ctx.rng.int_inclusive(5, 8);
                    let outer = cell * 0.4;
                    let points = geometry::star(middle, outer, outer * 0.5, tips, 0.0);
                    shapes.push(ShapePrimitive::polygon(points, weight));
                }
                2 => {
                    let size = cell * 0.6;
                    shapes.push(ShapePrimitive::polygon(
                        geometry::diamond(middle, size),
                        weight,
                    ));
                    let dot = ctx.colors.pick(ctx.rng);
                    let dot = dot.faded(0.7);
                    shapes.push(ShapePrimitive::circle(middle, size / 4.0, dot));
                }
                _ => {
                    let points = geometry::regular_polygon(middle, cell * 0.4, 6, 0.0);
                    shapes.push(ShapePrimitive::polygon(points, weight));
                }
            }
        }
    }

    shapes
}

/// Diamonds of 25 to 45 pixels, odd rows shifted by half a diamond
///
/// Occasional diamonds use a diagonal linear gradient.
pub fn diamonds(ctx: &mut SynthesisContext<'_>) -> Vec<ShapePrimitive> {
    let size = ctx.rng.int_inclusive(25, 45) as f64;
    let cols = SynthesisContext::cells_covering(ctx.canvas.width, size);
    let rows = SynthesisContext::cells_covering(ctx.canvas.height, size);
    let mut shapes = Vec::with_capacity(cols * rows);

    for row in 0..rows {
        let shift = if row % 2 == 1 { size / 2.0 } else { 0.0 };
        for col in 0..cols {
            let middle = Point::new(
                (col as f64).mul_add(size, shift + size / 2.0),
                (row as f64).mul_add(size, size / 2.0),
            );
            let weight = ctx.colors.pick(ctx.rng);
            let diamond = ShapePrimitive::polygon(geometry::diamond(middle, size), weight);

            if ctx.gradients && ctx.rng.one_in(GRADIENT_ONE_IN) {
                let end = ctx.colors.pick(ctx.rng).color;
                let gradient = Gradient::fading(GradientKind::Linear, weight, end, GRADIENT_FADE);
                shapes.push(diamond.with_gradient(gradient));
            } else {
                shapes.push(diamond);
            }
        }
    }

    shapes
}
