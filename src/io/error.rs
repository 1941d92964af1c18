//! Error types and context management for pattern generation

use crate::pattern::family::PatternFamily;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum PatternError {
    /// A palette contained no colors to sample from
    EmptyPalette {
        /// Name of the offending palette
        name: String,
    },

    /// A color string could not be parsed as `#RGB` or `#RRGGBB`
    InvalidColor {
        /// The rejected color text
        value: String,
    },

    /// A palette name hint matched nothing in the palette table
    UnknownPalette {
        /// The requested palette name
        name: String,
    },

    /// A family name did not match any known pattern family
    UnknownFamily {
        /// The requested family name
        name: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Synthesis of a pattern failed internally
    ///
    /// Never escapes the generator: it is logged and replaced by the
    /// fallback pattern.
    GenerationFailure {
        /// Family that was being synthesized
        family: PatternFamily,
        /// Underlying cause
        source: Box<PatternError>,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPalette { name } => write!(f, "Palette '{name}' has no colors"),
            Self::InvalidColor { value } => write!(f, "Invalid color '{value}'"),
            Self::UnknownPalette { name } => write!(f, "Unknown palette '{name}'"),
            Self::UnknownFamily { name } => write!(f, "Unknown pattern family '{name}'"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::GenerationFailure { family, source } => {
                write!(f, "Failed to generate {family} pattern: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GenerationFailure { source, .. } => Some(source.as_ref()),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, PatternError>;

/// Wraps synthesis errors as a generation failure of a specific family
pub trait WithFamily<T> {
    /// Attach the family being generated to an error
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`PatternError::GenerationFailure`]
    fn within_family(self, family: PatternFamily) -> Result<T>;
}

impl<T, E> WithFamily<T> for std::result::Result<T, E>
where
    E: Into<PatternError>,
{
    fn within_family(self, family: PatternFamily) -> Result<T> {
        self.map_err(|e| match e.into() {
            // Already attributed to a family; keep the innermost attribution
            failure @ PatternError::GenerationFailure { .. } => failure,
            other => PatternError::GenerationFailure {
                family,
                source: Box::new(other),
            },
        })
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PatternError {
    PatternError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PatternError {
    PatternError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
