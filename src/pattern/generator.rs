//! Pattern generator entry points

use crate::color::palette::{PaletteTable, choose_background};
use crate::color::weights::{ColorWeight, WorkingSet};
use crate::io::error::{Result, WithFamily, computation_error};
use crate::pattern::fallback::{Accents, fallback_pattern};
use crate::pattern::family::{FamilyChoice, PatternFamily, SynthesisContext};
use crate::pattern::result::{CanvasSpec, PatternResult};
use crate::random::source::RandomSource;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Soft hints for one generation call
///
/// Every field is optional in spirit: the default request draws a circle
/// pattern from a random palette.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternRequest {
    /// Family to synthesize
    pub family: FamilyChoice,
    /// Palette name hint
    pub palette: Option<String>,
    /// Color count hint, clamped into the supported range
    pub color_count: Option<usize>,
    /// Fixed working set, bypassing palette sampling entirely
    pub colors: Option<Vec<ColorWeight>>,
    /// Whether flat fills may be replaced by gradients
    pub gradients: bool,
}

impl Default for PatternRequest {
    fn default() -> Self {
        Self {
            family: FamilyChoice::default(),
            palette: None,
            color_count: None,
            colors: None,
            gradients: true,
        }
    }
}

impl PatternRequest {
    /// Request a specific family
    #[must_use]
    pub fn with_family(mut self, family: PatternFamily) -> Self {
        self.family = FamilyChoice::Fixed(family);
        self
    }

    /// Request a uniformly chosen family per call
    #[must_use]
    pub fn with_random_family(mut self) -> Self {
        self.family = FamilyChoice::Random;
        self
    }

    /// Hint a palette by name
    #[must_use]
    pub fn with_palette(mut self, name: impl Into<String>) -> Self {
        self.palette = Some(name.into());
        self
    }

    /// Hint the number of colors sampled from the palette
    #[must_use]
    pub fn with_color_count(mut self, count: usize) -> Self {
        self.color_count = Some(count);
        self
    }

    /// Use exactly these color weights
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<ColorWeight>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Keep every fill flat
    #[must_use]
    pub fn without_gradients(mut self) -> Self {
        self.gradients = false;
        self
    }
}

/// Produces decorative patterns from read-only palette data
///
/// Holds no mutable state besides a call counter used to derive per-call
/// seeds, so one instance can serve many threads.
#[derive(Debug)]
pub struct PatternGenerator<'t> {
    palettes: &'t PaletteTable,
    accents: Accents,
    seed: Option<u64>,
    calls: AtomicU64,
}

static SHARED: LazyLock<PatternGenerator<'static>> = LazyLock::new(PatternGenerator::new);

impl PatternGenerator<'static> {
    /// Entropy-seeded generator over the built-in palettes
    pub fn new() -> Self {
        Self::with_palettes(PaletteTable::builtin())
    }

    /// Reproducible generator over the built-in palettes
    pub fn seeded(seed: u64) -> Self {
        Self::new().with_seed(seed)
    }

    /// The process-wide default generator
    pub fn shared() -> &'static Self {
        &SHARED
    }
}

impl Default for PatternGenerator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> PatternGenerator<'t> {
    /// Entropy-seeded generator over a caller-supplied palette table
    pub const fn with_palettes(palettes: &'t PaletteTable) -> Self {
        Self {
            palettes,
            accents: Accents::DEFAULT,
            seed: None,
            calls: AtomicU64::new(0),
        }
    }

    /// Derive every call's randomness from `seed`
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the accent colors used by the fallback pattern
    #[must_use]
    pub const fn with_accents(mut self, accents: Accents) -> Self {
        self.accents = accents;
        self
    }

    /// Palette table this generator samples from
    pub const fn palettes(&self) -> &PaletteTable {
        self.palettes
    }

    /// Accent colors used by the fallback pattern
    pub const fn accents(&self) -> &Accents {
        &self.accents
    }

    /// Generate a circle pattern from a random palette
    pub fn generate(&self) -> PatternResult {
        self.generate_with(&PatternRequest::default())
    }

    /// Generate a pattern honoring the request's hints
    ///
    /// Never fails: any synthesis error is logged and answered with the
    /// fallback pattern.
    pub fn generate_with(&self, request: &PatternRequest) -> PatternResult {
        let mut rng = self.next_source();
        let family = request.family.resolve(&mut rng);

        match self.synthesize(family, request, &mut rng) {
            Ok(result) => {
                tracing::debug!(
                    family = %family,
                    shapes = result.shapes().len(),
                    gradients = result.gradient_count(),
                    "pattern synthesized"
                );
                result
            }
            Err(err) => {
                tracing::warn!(%err, "pattern generation failed, serving fallback");
                fallback_pattern(&self.accents)
            }
        }
    }

    /// Generate `count` independent patterns
    pub fn generate_batch(&self, request: &PatternRequest, count: usize) -> Vec<PatternResult> {
        (0..count).map(|_| self.generate_with(request)).collect()
    }

    fn next_source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => {
                let call = self.calls.fetch_add(1, Ordering::Relaxed);
                RandomSource::for_stream(seed, call)
            }
            None => RandomSource::from_entropy(),
        }
    }

    fn synthesize(
        &self,
        family: PatternFamily,
        request: &PatternRequest,
        rng: &mut RandomSource,
    ) -> Result<PatternResult> {
        let background = choose_background(rng).within_family(family)?;
        let colors = self.working_set(request, rng).within_family(family)?;
        let canvas = CanvasSpec::standard(background);

        let shapes = {
            let mut ctx = SynthesisContext {
                rng,
                colors: &colors,
                canvas: &canvas,
                gradients: request.gradients,
            };
            family.synthesize(&mut ctx)
        };

        if shapes.is_empty() {
            return Err(computation_error("shape synthesis", &"no shapes produced"))
                .within_family(family);
        }
        for shape in &shapes {
            shape.validate().within_family(family)?;
        }

        Ok(PatternResult::new(canvas, family, shapes))
    }

    fn working_set(
        &self,
        request: &PatternRequest,
        rng: &mut RandomSource,
    ) -> Result<WorkingSet> {
        if let Some(weights) = &request.colors {
            return WorkingSet::new(weights.clone());
        }
        let palette = self.palettes.resolve(request.palette.as_deref(), rng)?;
        WorkingSet::sample(palette, request.color_count, rng)
    }
}

/// Generate a circle pattern with the process-wide default generator
pub fn generate() -> PatternResult {
    PatternGenerator::shared().generate()
}
