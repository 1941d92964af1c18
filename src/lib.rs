//! Procedural generator of decorative SVG background patterns
//!
//! Each call samples a dark background and a working set of translucent colors
//! from a curated palette, synthesizes the shapes of one pattern family, and
//! serializes them as a standalone SVG document. Generation never fails: any
//! internal error is answered with a fixed fallback pattern.

#![forbid(unsafe_code)]

/// Palettes, parsed colors, and weighted working sets
pub mod color;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Pattern families, the generator, and its results
pub mod pattern;
/// Seedable randomness shared by every synthesis step
pub mod random;
/// Geometric helpers and drawable primitives
pub mod shape;

pub use io::error::{PatternError, Result};
pub use pattern::{PatternFamily, PatternGenerator, PatternRequest, PatternResult, generate};
