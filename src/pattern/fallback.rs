//! Accent colors and the fixed pattern served when synthesis fails

use crate::color::rgb::Rgb;
use crate::color::weights::ColorWeight;
use crate::io::configuration::BACKGROUND_MAX_CHANNEL;
use crate::io::error::{Result, invalid_parameter};
use crate::pattern::result::{CanvasSpec, PatternResult};
use crate::shape::geometry::Point;
use crate::shape::primitive::ShapePrimitive;

/// Site accent colors used by the fallback pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accents {
    primary: Rgb,
    hover: Rgb,
    background: Rgb,
}

impl Accents {
    /// Default primary accent
    pub const PRIMARY: Rgb = Rgb::new(0xB5, 0x95, 0xFF);
    /// Default hover accent
    pub const HOVER: Rgb = Rgb::new(0x9A, 0x7F, 0xE6);
    /// Default background
    pub const BACKGROUND: Rgb = Rgb::new(0x1A, 0x1A, 0x1A);
    /// Default accent set
    pub const DEFAULT: Self = Self {
        primary: Self::PRIMARY,
        hover: Self::HOVER,
        background: Self::BACKGROUND,
    };

    /// Validate and bundle accent colors
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the background is too bright
    /// for shapes to contrast against it
    pub fn new(primary: Rgb, hover: Rgb, background: Rgb) -> Result<Self> {
        if !background.is_dark(BACKGROUND_MAX_CHANNEL) {
            return Err(invalid_parameter(
                "background",
                &background,
                &format!("brightest channel must not exceed {BACKGROUND_MAX_CHANNEL:#04x}"),
            ));
        }
        Ok(Self {
            primary,
            hover,
            background,
        })
    }

    /// Primary accent
    pub const fn primary(&self) -> Rgb {
        self.primary
    }

    /// Hover accent
    pub const fn hover(&self) -> Rgb {
        self.hover
    }

    /// Background accent
    pub const fn background(&self) -> Rgb {
        self.background
    }
}

impl Default for Accents {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Number of circles in the fallback pattern
pub const FALLBACK_SHAPE_COUNT: usize = 5;

// (x, y, radius, use primary, opacity)
const FALLBACK_CIRCLES: [(f64, f64, f64, bool, f64); FALLBACK_SHAPE_COUNT] = [
    (51.0, 49.0, 40.0, true, 0.6),
    (153.0, 98.0, 56.0, false, 0.5),
    (255.0, 49.0, 40.0, true, 0.6),
    (102.0, 122.0, 28.0, false, 0.4),
    (204.0, 24.0, 28.0, false, 0.4),
];

/// Build the fixed fallback pattern from accent colors
///
/// Uses no randomness and no palette data, so it cannot fail.
pub fn fallback_pattern(accents: &Accents) -> PatternResult {
    let shapes = FALLBACK_CIRCLES
        .iter()
        .map(|&(x, y, radius, primary, opacity)| {
            let color = if primary {
                accents.primary
            } else {
                accents.hover
            };
            ShapePrimitive::circle(Point::new(x, y), radius, ColorWeight { color, opacity })
        })
        .collect();

    PatternResult::fallback(CanvasSpec::standard(accents.background), shapes)
}
