//! Colors, palettes and per-call working color sets

/// Static palette tables and palette lookup
pub mod palette;
/// RGB values parsed from hex notation
pub mod rgb;
/// Color weights sampled for a single generation call
pub mod weights;

pub use palette::{Palette, PaletteTable};
pub use rgb::Rgb;
pub use weights::{ColorWeight, WorkingSet};
