//! Randomness for pattern synthesis

/// Uniform random draws with OS or explicit seeding
pub mod source;

pub use source::RandomSource;
