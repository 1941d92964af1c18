//! Pattern families, the generator and its results

/// Scattered circle family
pub mod circles;
/// Accent colors and the fixed fallback pattern
pub mod fallback;
/// Family selection and the synthesis context
pub mod family;
/// Generator entry points and request hints
pub mod generator;
/// Families laid out around the canvas center
pub mod radial;
/// Canvas and finished pattern types
pub mod result;
/// Spiral path family
pub mod spiral;
/// Grid-based families
pub mod tiling;

pub use fallback::Accents;
pub use family::{FamilyChoice, PatternFamily};
pub use generator::{PatternGenerator, PatternRequest, generate};
pub use result::{CanvasSpec, PatternResult};
