//! Working color sets sampled from a palette for a single generation call

use crate::color::palette::Palette;
use crate::color::rgb::Rgb;
use crate::io::configuration::{COLOR_COUNT_RANGE, MAX_COLOR_OPACITY, MIN_COLOR_OPACITY};
use crate::io::error::{PatternError, Result, computation_error};
use crate::random::source::RandomSource;

/// A color paired with the opacity shapes painted in it should carry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorWeight {
    /// Paint color
    pub color: Rgb,
    /// Opacity in `[0, 1]`
    pub opacity: f64,
}

impl ColorWeight {
    /// Create a weight, clamping opacity into `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns a computation error if the opacity is not finite
    pub fn new(color: Rgb, opacity: f64) -> Result<Self> {
        if !opacity.is_finite() {
            return Err(computation_error(
                "color weight",
                &format!("opacity {opacity}"),
            ));
        }
        Ok(Self {
            color,
            opacity: opacity.clamp(0.0, 1.0),
        })
    }

    /// Same color with opacity scaled by `factor`, kept within `[0, 1]`
    pub fn faded(self, factor: f64) -> Self {
        Self {
            color: self.color,
            opacity: (self.opacity * factor).clamp(0.0, 1.0),
        }
    }
}

/// The per-call set of color weights every shape draws from
#[derive(Clone, Debug, PartialEq)]
pub struct WorkingSet {
    weights: Vec<ColorWeight>,
}

impl WorkingSet {
    /// Wrap a fixed list of weights
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyPalette`] if no weights are given
    pub fn new(weights: Vec<ColorWeight>) -> Result<Self> {
        if weights.is_empty() {
            return Err(PatternError::EmptyPalette {
                name: "<working set>".to_string(),
            });
        }
        Ok(Self { weights })
    }

    /// Sample weights from a palette
    ///
    /// `count` is clamped into the supported color count range; without a
    /// count hint one is drawn uniformly from that range.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or contains malformed colors
    pub fn sample(
        palette: &Palette,
        count: Option<usize>,
        rng: &mut RandomSource,
    ) -> Result<Self> {
        let colors = palette.parse_colors()?;
        let count = count.map_or_else(
            || rng.int_inclusive(*COLOR_COUNT_RANGE.start(), *COLOR_COUNT_RANGE.end()),
            |n| n.clamp(*COLOR_COUNT_RANGE.start(), *COLOR_COUNT_RANGE.end()),
        );

        let mut weights = Vec::with_capacity(count);
        for _ in 0..count {
            let color = rng
                .pick(&colors)
                .copied()
                .ok_or_else(|| PatternError::EmptyPalette {
                    name: palette.name().to_string(),
                })?;
            let opacity = rng.uniform(MIN_COLOR_OPACITY, MAX_COLOR_OPACITY);
            weights.push(ColorWeight::new(color, opacity)?);
        }

        Self::new(weights)
    }

    /// Pick one weight uniformly
    pub fn pick(&self, rng: &mut RandomSource) -> ColorWeight {
        // Non-empty by construction
        rng.pick(&self.weights)
            .copied()
            .unwrap_or(ColorWeight {
                color: Rgb::new(0xFF, 0xFF, 0xFF),
                opacity: 1.0,
            })
    }

    /// All weights in sampling order
    pub fn weights(&self) -> &[ColorWeight] {
        &self.weights
    }

    /// Number of weights
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the set has no weights
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
