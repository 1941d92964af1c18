//! Tests for the scattered circle family

#[cfg(test)]
mod tests {
    use svgpattern::color::rgb::Rgb;
    use svgpattern::color::weights::{ColorWeight, WorkingSet};
    use svgpattern::io::configuration::{
        CIRCLE_COUNT_RANGE, CIRCLE_MAX_RADIUS, CIRCLE_MIN_RADIUS, EDGE_BLEED,
    };
    use svgpattern::pattern::circles;
    use svgpattern::pattern::family::SynthesisContext;
    use svgpattern::pattern::result::CanvasSpec;
    use svgpattern::random::source::RandomSource;
    use svgpattern::shape::primitive::{Geometry, Paint};

    fn colors() -> WorkingSet {
        WorkingSet::new(vec![
            ColorWeight::new(Rgb::new(0xFF, 0, 0), 0.5).unwrap(),
            ColorWeight::new(Rgb::new(0, 0xFF, 0), 0.7).unwrap(),
        ])
        .unwrap()
    }

    // Tests circle count, radius and center bleed stay in range
    // Verified by widening the edge bleed
    #[test]
    fn test_circle_placement() {
        let colors = colors();
        let canvas = CanvasSpec::standard(Rgb::new(0, 0, 0));

        for seed in 0..20 {
            let mut rng = RandomSource::seeded(seed);
            let mut ctx = SynthesisContext {
                rng: &mut rng,
                colors: &colors,
                canvas: &canvas,
                gradients: true,
            };
            let shapes = circles::synthesize(&mut ctx);
            assert!(CIRCLE_COUNT_RANGE.contains(&shapes.len()));

            for shape in &shapes {
                let Geometry::Circle { center, radius } = shape.geometry else {
                    unreachable!("circle family produced {:?}", shape.geometry);
                };
                assert!((CIRCLE_MIN_RADIUS..CIRCLE_MAX_RADIUS).contains(&radius));
                assert!(center.x >= -EDGE_BLEED && center.x <= canvas.width + EDGE_BLEED);
                assert!(center.y >= -EDGE_BLEED && center.y <= canvas.height + EDGE_BLEED);
            }
        }
    }

    // Tests disabling gradients keeps every fill flat
    // Verified by ignoring the gradients flag
    #[test]
    fn test_no_gradients() {
        let colors = colors();
        let canvas = CanvasSpec::standard(Rgb::new(0, 0, 0));

        for seed in 0..20 {
            let mut rng = RandomSource::seeded(seed);
            let mut ctx = SynthesisContext {
                rng: &mut rng,
                colors: &colors,
                canvas: &canvas,
                gradients: false,
            };
            let shapes = circles::synthesize(&mut ctx);
            assert!(shapes.iter().all(|s| matches!(s.paint, Paint::Fill(_))));
        }
    }

    // Tests some circles receive radial gradients when allowed
    // Verified by never drawing the gradient chance
    #[test]
    fn test_gradients_appear() {
        let colors = colors();
        let canvas = CanvasSpec::standard(Rgb::new(0, 0, 0));
        let mut rng = RandomSource::seeded(11);
        let mut gradients = 0;

        for _ in 0..10 {
            let mut ctx = SynthesisContext {
                rng: &mut rng,
                colors: &colors,
                canvas: &canvas,
                gradients: true,
            };
            gradients += circles::synthesize(&mut ctx)
                .iter()
                .filter(|s| matches!(s.paint, Paint::Gradient(_)))
                .count();
        }

        assert!(gradients > 0);
    }
}
