//! Uniform random draws backed by an OS-seeded or explicitly seeded generator

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

// Odd 64-bit golden-ratio increment; spreads consecutive indices across the seed space
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Random selector used for every stochastic choice in a generation call
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed from the operating system, falling back to a clock-derived seed
    ///
    /// The fallback still draws uniformly; it only loses unpredictability.
    pub fn from_entropy() -> Self {
        match StdRng::try_from_os_rng() {
            Ok(rng) => Self { rng },
            Err(err) => {
                tracing::debug!(%err, "OS entropy unavailable, using clock seed");
                Self::seeded(fallback_seed())
            }
        }
    }

    /// Create a deterministic source
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source for the `stream`-th draw sequence under `seed`
    ///
    /// Neighbouring seeds and neighbouring streams map to unrelated
    /// sequences, so `(seed, k)` never reproduces `(seed + k, 0)`.
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        let mixed = seed ^ stream.wrapping_mul(GOLDEN_GAMMA);
        Self::seeded(Self::seeded(mixed).next_seed())
    }

    /// Uniform float in `[min, max)`; returns `min` for an empty range
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if min < max {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }

    /// Uniform integer in `[min, max]`; returns `min` for an empty range
    pub fn int_inclusive(&mut self, min: usize, max: usize) -> usize {
        if min < max {
            self.rng.random_range(min..=max)
        } else {
            min
        }
    }

    /// True with probability `1 / denominator`
    pub fn one_in(&mut self, denominator: u32) -> bool {
        denominator > 0 && self.rng.random_ratio(1, denominator)
    }

    /// Pick one element uniformly, `None` for an empty slice
    pub fn pick<'s, T>(&mut self, items: &'s [T]) -> Option<&'s T> {
        items.choose(&mut self.rng)
    }

    fn next_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

// Clock nanos mixed with a process counter so back-to-back calls differ
fn fallback_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    let count = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    nanos ^ count.wrapping_mul(GOLDEN_GAMMA)
}
