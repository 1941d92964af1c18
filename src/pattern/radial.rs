//! Families laid out around the canvas center

use crate::color::weights::ColorWeight;
use crate::io::configuration::SPIRAL_STEPS;
use crate::pattern::family::SynthesisContext;
use crate::shape::geometry::{self, Point};
use crate::shape::primitive::ShapePrimitive;
use std::f64::consts::{FRAC_PI_2, TAU};

fn center(ctx: &SynthesisContext<'_>) -> Point {
    Point::new(ctx.canvas.width / 2.0, ctx.canvas.height / 2.0)
}

// Inner colors keep the opacity of the element they decorate
fn tinted(ctx: &mut SynthesisContext<'_>, base: ColorWeight, factor: f64) -> ColorWeight {
    let inner = ctx.colors.pick(ctx.rng);
    ColorWeight {
        color: inner.color,
        opacity: base.opacity,
    }
    .faded(factor)
}

/// Six to twelve evenly spaced stroked rings, every other ring backed by a disc
pub fn concentric(ctx: &mut SynthesisContext<'_>) -> Vec<ShapePrimitive> {
    let origin = center(ctx);
    let rings = ctx.rng.int_inclusive(6, 12);
    let spacing = ctx.inscribed_radius() / rings as f64;
    let mut shapes = Vec::with_capacity(rings * 2);

    for ring in 0..rings {
        let radius = spacing * (ring + 1) as f64;
        let weight = ctx.colors.pick(ctx.rng);
        let stroke_width = ctx.rng.int_inclusive(2, 5) as f64;
        shapes.push(ShapePrimitive::ring(origin, radius, stroke_width, weight));

        if ring % 2 == 0 && ring > 0 {
            let inner = tinted(ctx, weight, 0.5);
            shapes.push(ShapePrimitive::circle(origin, radius * 0.7, inner));
        }
    }

    shapes
}

/// Four to eight rings, each with 6 to 16 circles, tilted squares or diamonds
pub fn mandala(ctx: &mut SynthesisContext<'_>) -> Vec<ShapePrimitive> {
    let origin = center(ctx);
    let rings = ctx.rng.int_inclusive(4, 8);
    let spacing = ctx.inscribed_radius() / rings as f64;
    let element_size = spacing * 0.3;
    let mut shapes = Vec::new();

    for ring in 0..rings {
        let ring_radius = spacing * (ring + 1) as f64;
        let elements = ctx.rng.int_inclusive(6, 16);

        for i in 0..elements {
            let angle = TAU * i as f64 / elements as f64;
            let position = origin.polar(ring_radius, angle);
            let weight = ctx.colors.pick(ctx.rng);

            let shape = match ctx.rng.int_inclusive(0, 2) {
                0 => ShapePrimitive::circle(position, element_size, weight),
                1 => ShapePrimitive::polygon(
                    geometry::rotated_square(position, element_size, angle),
                    weight,
                ),
                _ => ShapePrimitive::polygon(
                    geometry::diamond(position, element_size * 2.0),
                    weight,
                ),
            };
            shapes.push(shape);
        }
    }

    shapes
}

/// Four to six levels of radiating branches
///
/// Each branch ends in a winding path, a circle with four satellites, a
/// polygon or a star.
pub fn fractal(ctx: &mut SynthesisContext<'_>) -> Vec<ShapePrimitive> {
    let origin = center(ctx);
    let levels = ctx.rng.int_inclusive(4, 6);
    let base_radius = ctx.inscribed_radius() / levels as f64;
    let mut shapes = Vec::new();

    for level in 0..levels {
        let level_radius = base_radius * (level + 1) as f64;
        let branches = ctx.rng.int_inclusive(6, 12);
        let branch_length = level_radius * 0.8;

        for branch in 0..branches {
            let angle = TAU * branch as f64 / branches as f64;
            let start = origin.polar(level_radius, angle);
            let end = origin.polar(level_radius + branch_length, angle);
            let weight = ctx.colors.pick(ctx.rng);

            match ctx.rng.int_inclusive(0, 3) {
                0 => {
                    let points = geometry::spiral_between(start, end, 3.0, SPIRAL_STEPS);
                    shapes.push(ShapePrimitive::path(points, (2 + level) as f64, weight));
                }
                1 => {
                    let radius = branch_length * 0.3;
                    shapes.push(ShapePrimitive::circle(end, radius, weight));

                    let satellite = tinted(ctx, weight, 0.7);
                    for i in 0..4_u8 {
                        let position = end.polar(radius * 0.5, FRAC_PI_2 * f64::from(i));
                        shapes.push(ShapePrimitive::circle(position, radius * 0.3, satellite));
                    }
                }
                2 => {
                    let sides = ctx.rng.int_inclusive(5, 8);
                    let points = geometry::regular_polygon(end, branch_length * 0.4, sides, angle);
                    shapes.push(ShapePrimitive::polygon(points, weight));
                }
                _ => {
                    let outer = branch_length * 0.3;
                    let tips = ctx.rng.int_inclusive(5, 8);
                    let points = geometry::star(end, outer, outer * 0.5, tips, 0.0);
                    shapes.push(ShapePrimitive::polygon(points, weight));
                }
            }
        }
    }

    shapes
}
