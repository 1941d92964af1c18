//! Vector shape model

/// Point math for polygons, stars and spirals
pub mod geometry;
/// Drawable shape primitives and their paint
pub mod primitive;

pub use geometry::{Bounds, Point};
pub use primitive::{Geometry, Gradient, GradientKind, GradientStop, Paint, ShapePrimitive};
