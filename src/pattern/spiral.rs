//! Spiral path family

use crate::io::configuration::SPIRAL_STEPS;
use crate::pattern::family::SynthesisContext;
use crate::shape::geometry::{self, Point};
use crate::shape::primitive::ShapePrimitive;

/// Eight to eighteen stroked spirals sharing one radius, turn count and width
pub fn synthesize(ctx: &mut SynthesisContext<'_>) -> Vec<ShapePrimitive> {
    let count = ctx.rng.int_inclusive(8, 18);
    let max_radius = ctx.canvas.width.min(ctx.canvas.height) * 0.4;
    let turns = ctx.rng.int_inclusive(2, 5) as f64;
    let stroke_width = ctx.rng.int_inclusive(1, 3) as f64;

    (0..count)
        .map(|_| {
            let origin = Point::new(
                ctx.rng.uniform(0.0, ctx.canvas.width),
                ctx.rng.uniform(0.0, ctx.canvas.height),
            );
            let weight = ctx.colors.pick(ctx.rng);
            let points = geometry::spiral(origin, max_radius, turns, SPIRAL_STEPS);
            ShapePrimitive::path(points, stroke_width, weight)
        })
        .collect()
}
