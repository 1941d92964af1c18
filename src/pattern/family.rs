//! Pattern families and the shared synthesis context

use crate::color::weights::WorkingSet;
use crate::io::configuration::CIRCLE_COUNT_RANGE;
use crate::io::error::PatternError;
use crate::pattern::result::CanvasSpec;
use crate::pattern::{circles, radial, spiral, tiling};
use crate::random::source::RandomSource;
use crate::shape::primitive::ShapePrimitive;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Shape synthesis strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternFamily {
    /// Scattered translucent circles, some with radial gradients
    Circles,
    /// Stroked rings around the canvas center with inner discs
    Concentric,
    /// Rings of circles, squares and diamonds around the center
    Mandala,
    /// Grid of polygons, stars and hexagons
    Tessellation,
    /// Offset grid of diamonds, some with linear gradients
    Diamonds,
    /// Stroked spiral paths
    Spiral,
    /// Radiating branches ending in paths, circle clusters, polygons or stars
    Fractal,
}

impl PatternFamily {
    /// Every family, in declaration order
    pub const ALL: [Self; 7] = [
        Self::Circles,
        Self::Concentric,
        Self::Mandala,
        Self::Tessellation,
        Self::Diamonds,
        Self::Spiral,
        Self::Fractal,
    ];

    /// Lowercase name used on the command line and in logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circles => "circles",
            Self::Concentric => "concentric",
            Self::Mandala => "mandala",
            Self::Tessellation => "tessellation",
            Self::Diamonds => "diamonds",
            Self::Spiral => "spiral",
            Self::Fractal => "fractal",
        }
    }

    /// Number of shapes a successful synthesis of this family produces
    ///
    /// Grid families derive their bounds from the cell size range and the
    /// fixed canvas.
    pub const fn shape_count_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Circles => CIRCLE_COUNT_RANGE,
            Self::Concentric => 8..=17,
            Self::Mandala => 24..=128,
            Self::Tessellation => 60..=306,
            Self::Diamonds => 40..=98,
            Self::Spiral => 8..=18,
            Self::Fractal => 24..=360,
        }
    }

    /// Pick a family uniformly
    pub fn random(rng: &mut RandomSource) -> Self {
        rng.pick(&Self::ALL).copied().unwrap_or(Self::Circles)
    }

    /// Produce this family's shapes in draw order
    pub fn synthesize(self, ctx: &mut SynthesisContext<'_>) -> Vec<ShapePrimitive> {
        match self {
            Self::Circles => circles::synthesize(ctx),
            Self::Concentric => radial::concentric(ctx),
            Self::Mandala => radial::mandala(ctx),
            Self::Fractal => radial::fractal(ctx),
            Self::Tessellation => tiling::tessellation(ctx),
            Self::Diamonds => tiling::diamonds(ctx),
            Self::Spiral => spiral::synthesize(ctx),
        }
    }
}

impl fmt::Display for PatternFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternFamily {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PatternError::UnknownFamily {
                name: s.to_string(),
            })
    }
}

/// Which family a request asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyChoice {
    /// Always this family
    Fixed(PatternFamily),
    /// A uniformly chosen family per call
    Random,
}

impl FamilyChoice {
    /// Settle the choice for one generation call
    pub fn resolve(self, rng: &mut RandomSource) -> PatternFamily {
        match self {
            Self::Fixed(family) => family,
            Self::Random => PatternFamily::random(rng),
        }
    }
}

impl Default for FamilyChoice {
    fn default() -> Self {
        Self::Fixed(PatternFamily::Circles)
    }
}

impl fmt::Display for FamilyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(family) => family.fmt(f),
            Self::Random => f.write_str("random"),
        }
    }
}

impl FromStr for FamilyChoice {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("random") {
            Ok(Self::Random)
        } else {
            s.parse().map(Self::Fixed)
        }
    }
}

/// Everything a family needs to place shapes for one call
pub struct SynthesisContext<'a> {
    /// Random source for this call
    pub rng: &'a mut RandomSource,
    /// Working color set for this call
    pub colors: &'a WorkingSet,
    /// Output canvas
    pub canvas: &'a CanvasSpec,
    /// Whether flat fills may be replaced by gradients
    pub gradients: bool,
}

impl SynthesisContext<'_> {
    /// Half of the shorter canvas side
    pub fn inscribed_radius(&self) -> f64 {
        self.canvas.width.min(self.canvas.height) / 2.0
    }

    /// Number of grid cells of `cell` pixels needed to cover `extent`, plus one
    pub fn cells_covering(extent: f64, cell: f64) -> usize {
        if cell > 0.0 {
            (extent / cell).ceil() as usize + 1
        } else {
            1
        }
    }
}
