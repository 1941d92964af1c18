//! Tests for the tessellation and diamond grid families

#[cfg(test)]
mod tests {
    use svgpattern::color::rgb::Rgb;
    use svgpattern::color::weights::{ColorWeight, WorkingSet};
    use svgpattern::pattern::family::{PatternFamily, SynthesisContext};
    use svgpattern::pattern::result::CanvasSpec;
    use svgpattern::pattern::tiling;
    use svgpattern::random::source::RandomSource;
    use svgpattern::shape::primitive::{Geometry, GradientKind, Paint, ShapePrimitive};

    type Synthesizer = fn(&mut SynthesisContext<'_>) -> Vec<ShapePrimitive>;

    fn run(synthesize: Synthesizer, seed: u64, gradients: bool) -> Vec<ShapePrimitive> {
        let colors = WorkingSet::new(vec![
            ColorWeight::new(Rgb::new(0xEE, 0xCC, 0x00), 0.5).unwrap(),
        ])
        .unwrap();
        let canvas = CanvasSpec::standard(Rgb::new(0, 0, 0));
        let mut rng = RandomSource::seeded(seed);
        let mut ctx = SynthesisContext {
            rng: &mut rng,
            colors: &colors,
            canvas: &canvas,
            gradients,
        };
        synthesize(&mut ctx)
    }

    // Tests grid cell counting covers the extent with one spare cell
    // Verified by dropping the spare cell
    #[test]
    fn test_cells_covering() {
        assert_eq!(SynthesisContext::cells_covering(306.0, 35.0), 10);
        assert_eq!(SynthesisContext::cells_covering(147.0, 20.0), 9);
        assert_eq!(SynthesisContext::cells_covering(100.0, 0.0), 1);
    }

    // Tests tessellation covers the grid with filled shapes
    // Verified by skipping the last column
    #[test]
    fn test_tessellation_counts() {
        for seed in 0..20 {
            let shapes = run(tiling::tessellation, seed, true);
            assert!(
                PatternFamily::Tessellation
                    .shape_count_range()
                    .contains(&shapes.len())
            );
            assert!(shapes.iter().all(|s| matches!(s.paint, Paint::Fill(_))));
        }
    }

    // Tests diamonds are four-point polygons within the count range
    // Verified by emitting hexagons
    #[test]
    fn test_diamond_shapes() {
        for seed in 0..20 {
            let shapes = run(tiling::diamonds, seed, true);
            assert!(PatternFamily::Diamonds.shape_count_range().contains(&shapes.len()));
            for shape in &shapes {
                let Geometry::Polygon { points } = &shape.geometry else {
                    unreachable!("diamond is not a polygon");
                };
                assert_eq!(points.len(), 4);
            }
        }
    }

    // Tests diamond gradients are linear and disabled on request
    // Verified by using radial gradients
    #[test]
    fn test_diamond_gradients() {
        let mut linear = 0;
        for seed in 0..5 {
            for shape in run(tiling::diamonds, seed, true) {
                if let Paint::Gradient(gradient) = shape.paint {
                    assert_eq!(gradient.kind, GradientKind::Linear);
                    linear += 1;
                }
            }
            assert!(
                run(tiling::diamonds, seed, false)
                    .iter()
                    .all(|s| matches!(s.paint, Paint::Fill(_)))
            );
        }
        assert!(linear > 0);
    }
}
