//! Tests for SVG serialization and file export

#[cfg(test)]
mod tests {
    use svgpattern::color::rgb::Rgb;
    use svgpattern::color::weights::ColorWeight;
    use svgpattern::io::svg::{format_number, gradient_id, render, write_svg};
    use svgpattern::pattern::family::PatternFamily;
    use svgpattern::pattern::result::{CanvasSpec, PatternResult};
    use svgpattern::shape::geometry::Point;
    use svgpattern::shape::primitive::{Gradient, GradientKind, ShapePrimitive};

    const RED: ColorWeight = ColorWeight {
        color: Rgb::new(0xFF, 0, 0),
        opacity: 0.5,
    };

    fn pattern(shapes: Vec<ShapePrimitive>) -> PatternResult {
        PatternResult::new(
            CanvasSpec::standard(Rgb::new(0x10, 0x20, 0x30)),
            PatternFamily::Circles,
            shapes,
        )
    }

    // Tests numbers keep at most two decimals without trailing zeros
    // Verified by printing full precision
    #[test]
    fn test_format_number() {
        assert_eq!(format_number(306.0), "306");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(2.345_678), "2.35");
        assert_eq!(format_number(-0.001), "0");
        assert_eq!(format_number(-12.1), "-12.1");
    }

    // Tests document root, background and shape order
    // Verified by drawing the background after shapes
    #[test]
    fn test_render_layout() {
        let svg = render(&pattern(vec![
            ShapePrimitive::circle(Point::new(10.0, 20.0), 5.0, RED),
            ShapePrimitive::polygon(
                vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.5)],
                RED,
            ),
        ]));

        let root = svg.find("<svg").unwrap();
        let root_tag = &svg[root..root + svg[root..].find('>').unwrap()];
        assert!(root_tag.contains(r#"width="306""#));
        assert!(root_tag.contains(r#"height="147""#));
        assert!(root_tag.contains(r#"viewBox="0 0 306 147""#));
        assert!(root_tag.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<defs"));

        let rect = svg.find("<rect").unwrap();
        let circle = svg.find("<circle").unwrap();
        let polygon = svg.find("<polygon").unwrap();
        assert!(rect < circle && circle < polygon);
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(svg.contains(r##"fill="#102030""##));
        assert!(svg.contains(r#"cx="10""#) && svg.contains(r#"r="5""#));
        assert!(svg.contains(r##"fill="#FF0000""##));
        assert!(svg.contains(r#"opacity="0.5""#));
        assert!(svg.contains(r#"points="0,0 4,0 2,3.5""#));
    }

    // Tests strokes render without fill and paths use move/line commands
    // Verified by filling stroked shapes
    #[test]
    fn test_render_paths_and_rings() {
        let svg = render(&pattern(vec![
            ShapePrimitive::ring(Point::new(1.0, 1.0), 3.0, 2.0, RED),
            ShapePrimitive::path(vec![Point::new(0.0, 0.0), Point::new(1.25, 2.0)], 1.5, RED),
        ]));

        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r##"stroke="#FF0000""##));
        assert!(svg.contains(r#"stroke-width="2""#));
        assert!(svg.contains(r#"stroke-width="1.5""#));
        assert!(svg.contains(r#"d="M0,0"#));
        assert!(svg.contains("L1.25,2"));
    }

    // Tests every gradient reference has a definition
    // Verified by skipping the defs block
    #[test]
    fn test_gradient_references_resolve() {
        let radial = Gradient::fading(GradientKind::Radial, RED, Rgb::new(0, 0, 0xFF), 0.3);
        let linear = Gradient::fading(GradientKind::Linear, RED, Rgb::new(0, 0xFF, 0), 0.3);
        let svg = render(&pattern(vec![
            ShapePrimitive::circle(Point::new(1.0, 1.0), 2.0, RED).with_gradient(radial),
            ShapePrimitive::circle(Point::new(3.0, 3.0), 2.0, RED),
            ShapePrimitive::polygon(
                vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
                RED,
            )
            .with_gradient(linear),
        ]));

        for index in 0..2 {
            let id = gradient_id(index);
            assert!(svg.contains(&format!(r#"id="{id}""#)));
            assert!(svg.contains(&format!("url(#{id})")));
        }
        assert!(svg.contains("<radialGradient"));
        assert!(svg.contains("<linearGradient"));
        assert!(svg.find("<defs") < svg.find("<rect"));
        assert!(svg.contains(r#"stop-opacity="0.15""#));
    }

    // Tests files are written with missing parent directories created
    // Verified by skipping directory creation
    #[test]
    fn test_write_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("card.svg");
        let result = pattern(vec![ShapePrimitive::circle(Point::new(1.0, 1.0), 2.0, RED)]);

        write_svg(&result, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&result));
    }
}
