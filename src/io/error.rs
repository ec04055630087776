//! Error types for tiling search and rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Requested grid dimensions cannot describe a grid
    InvalidDimensions {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
        /// Explanation of why the dimensions are rejected
        reason: String,
    },

    /// Grid area is odd while the caller requires an even-area grid
    OddArea {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
    },

    /// Every branch of the search tree was proven dead
    ///
    /// Fatal for the run; retrying with a fresh random source is up to the caller.
    SearchExhausted {
        /// Grid width of the failed run
        width: i32,
        /// Grid height of the failed run
        height: i32,
        /// Steps taken before the root ran out of viable children
        steps: usize,
    },

    /// A caller-imposed step budget ran out before the search finished
    StepLimitExceeded {
        /// Grid width of the run
        width: i32,
        /// Grid height of the run
        height: i32,
        /// The exhausted budget
        steps: usize,
    },

    /// An internal consistency check failed
    ///
    /// Indicates a defect; the run is aborted rather than producing an invalid tiling.
    InvariantViolation {
        /// Operation that detected the violation
        operation: &'static str,
        /// Description of the broken invariant
        reason: String,
    },

    /// `advance` was called after the run already finished
    GeneratorFinished {
        /// Grid width of the finished run
        width: i32,
        /// Grid height of the finished run
        height: i32,
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

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid grid dimensions {width}x{height}: {reason}")
            }
            Self::OddArea { width, height } => {
                write!(
                    f,
                    "Grid {width}x{height} has odd area and cannot be tiled by dominoes"
                )
            }
            Self::SearchExhausted {
                width,
                height,
                steps,
            } => {
                write!(
                    f,
                    "No complete tiling found for {width}x{height} grid after {steps} steps"
                )
            }
            Self::StepLimitExceeded {
                width,
                height,
                steps,
            } => {
                write!(
                    f,
                    "Step limit of {steps} reached before tiling {width}x{height} grid"
                )
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Invariant violated in {operation}: {reason}")
            }
            Self::GeneratorFinished { width, height } => {
                write!(
                    f,
                    "Generator for {width}x{height} grid has already finished"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> TilingError {
    TilingError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}
