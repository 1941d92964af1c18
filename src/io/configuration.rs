//! Generation constants and runtime configuration defaults

use std::ops::RangeInclusive;

// Canvas matches the aspect ratio of a subject card
/// Fixed canvas width in pixels
pub const CANVAS_WIDTH: f64 = 306.0;
/// Fixed canvas height in pixels
pub const CANVAS_HEIGHT: f64 = 147.0;

/// Brightest channel value a background color may carry
pub const BACKGROUND_MAX_CHANNEL: u8 = 0x40;

// Working color set sampled per generation call
/// Number of color weights drawn from the chosen palette
pub const COLOR_COUNT_RANGE: RangeInclusive<usize> = 4..=12;
/// Lower bound of sampled color opacity
pub const MIN_COLOR_OPACITY: f64 = 0.3;
/// Upper bound of sampled color opacity
pub const MAX_COLOR_OPACITY: f64 = 0.8;

/// One in this many circles is painted with a radial gradient
pub const GRADIENT_ONE_IN: u32 = 5;
/// Opacity multiplier applied to the outer gradient stop
pub const GRADIENT_FADE: f64 = 0.3;

// Circle family
/// Number of circles in a circle pattern
pub const CIRCLE_COUNT_RANGE: RangeInclusive<usize> = 25..=40;
/// Smallest circle radius
pub const CIRCLE_MIN_RADIUS: f64 = 20.0;
/// Largest circle radius
pub const CIRCLE_MAX_RADIUS: f64 = 80.0;
/// Distance circle centers may fall outside the canvas
pub const EDGE_BLEED: f64 = 20.0;

/// Points sampled along a spiral path
pub const SPIRAL_STEPS: usize = 50;

// Default values for configurable parameters
/// Fixed seed used by benches and documentation examples
pub const DEFAULT_SEED: u64 = 42;
/// Default number of patterns produced by the CLI
pub const DEFAULT_PATTERN_COUNT: usize = 1;

// Output settings
/// Stem used for batch output filenames
pub const OUTPUT_STEM: &str = "pattern";
/// Extension used for written patterns
pub const OUTPUT_EXTENSION: &str = "svg";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
