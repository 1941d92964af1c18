/// Command-line parsing and batch output
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types and result aliases
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Progress reporting for batch output
pub mod progress;
/// SVG serialization and file export
pub mod svg;
