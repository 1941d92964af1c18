//! Scattered circle family

use crate::io::configuration::{
    CIRCLE_COUNT_RANGE, CIRCLE_MAX_RADIUS, CIRCLE_MIN_RADIUS, EDGE_BLEED, GRADIENT_FADE,
    GRADIENT_ONE_IN,
};
use crate::pattern::family::SynthesisContext;
use crate::shape::geometry::Point;
use crate::shape::primitive::{Gradient, GradientKind, ShapePrimitive};

/// Scatter 25 to 40 circles, centers allowed to bleed past the edges
///
/// Roughly one circle in five trades its flat fill for a radial gradient
/// fading into a second working-set color.
pub fn synthesize(ctx: &mut SynthesisContext<'_>) -> Vec<ShapePrimitive> {
    let count = ctx
        .rng
        .int_inclusive(*CIRCLE_COUNT_RANGE.start(), *CIRCLE_COUNT_RANGE.end());
    let mut shapes = Vec::with_capacity(count);

    for _ in 0..count {
        let center = Point::new(
            ctx.rng.uniform(-EDGE_BLEED, ctx.canvas.width + EDGE_BLEED),
            ctx.rng.uniform(-EDGE_BLEED, ctx.canvas.height + EDGE_BLEED),
        );
        let radius = ctx.rng.uniform(CIRCLE_MIN_RADIUS, CIRCLE_MAX_RADIUS);
        let weight = ctx.colors.pick(ctx.rng);
        let circle = ShapePrimitive::circle(center, radius, weight);

        if ctx.gradients && ctx.rng.one_in(GRADIENT_ONE_IN) {
            let outer = ctx.colors.pick(ctx.rng).color;
            let gradient = Gradient::fading(GradientKind::Radial, weight, outer, GRADIENT_FADE);
            shapes.push(circle.with_gradient(gradient));
        } else {
            shapes.push(circle);
        }
    }

    shapes
}
