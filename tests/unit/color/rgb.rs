//! Tests for hex color parsing and formatting

#[cfg(test)]
mod tests {
    use svgpattern::PatternError;
    use svgpattern::color::rgb::Rgb;

    // Tests six-digit hex parsing
    // Verified by swapping channel offsets
    #[test]
    fn test_parse_six_digits() {
        let color = Rgb::parse("#1a2B3c").unwrap();
        assert_eq!(color, Rgb::new(0x1A, 0x2B, 0x3C));
    }

    // Tests three-digit shorthand expands each nibble
    // Verified by expanding with a shift instead of multiplication
    #[test]
    fn test_parse_three_digits() {
        let color = Rgb::parse("#f80").unwrap();
        assert_eq!(color, Rgb::new(0xFF, 0x88, 0x00));
    }

    // Tests malformed strings are rejected with the offending text
    // Verified by accepting strings without a leading hash
    #[test]
    fn test_parse_rejects_malformed() {
        for value in ["FF0000", "#FF00", "#GG0000", "", "#", "#ff00001"] {
            match Rgb::parse(value) {
                Err(PatternError::InvalidColor { value: rejected }) => {
                    assert_eq!(rejected, value);
                }
                other => unreachable!("expected InvalidColor for {value:?}, got {other:?}"),
            }
        }
    }

    // Tests display renders uppercase six-digit hex
    // Verified by using lowercase formatting
    #[test]
    fn test_display_uppercase() {
        assert_eq!(Rgb::new(0xAB, 0x05, 0xFF).to_string(), "#AB05FF");
        assert_eq!(Rgb::parse("#abc").unwrap().to_string(), "#AABBCC");
    }

    // Tests darkness threshold uses the brightest channel
    // Verified by averaging channels instead
    #[test]
    fn test_is_dark_uses_max_channel() {
        let color = Rgb::new(0x10, 0x41, 0x00);
        assert_eq!(color.max_channel(), 0x41);
        assert!(!color.is_dark(0x40));
        assert!(Rgb::new(0x40, 0x40, 0x40).is_dark(0x40));
    }

    // Tests FromStr delegates to parse
    // Verified by returning a default color from from_str
    #[test]
    fn test_from_str() {
        let color: Rgb = " #102030 ".parse().unwrap();
        assert_eq!(color, Rgb::new(0x10, 0x20, 0x30));
        assert!("blue".parse::<Rgb>().is_err());
    }
}
