//! Error types for mosaic construction and file handling

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::Solution;
use crate::spatial::Location;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// A solver pass left cells of a region uncovered
    ///
    /// Occurs when no candidate piece fits the remaining gaps, for example when the
    /// catalog has no 1x1 piece. The best-effort placement is kept in `partial`.
    UnsolvableRegion {
        /// Cells still `ToBeFilled` after the pass, in row-major order
        remaining: Vec<Location>,
        /// Placements made before the solver gave up
        partial: Box<Solution>,
    },

    /// An orientation value outside the three known cases
    InvalidOrientation {
        /// The rejected input
        value: String,
    },

    /// Ideal image data doesn't meet assembly requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
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

impl MosaicError {
    /// Placements made before an unsolvable region was detected
    pub fn partial_solution(&self) -> Option<&Solution> {
        match self {
            Self::UnsolvableRegion { partial, .. } => Some(&**partial),
            _ => None,
        }
    }

    /// Consume the error, keeping the partial placement of an unsolvable region
    pub fn into_partial_solution(self) -> Option<Solution> {
        match self {
            Self::UnsolvableRegion { partial, .. } => Some(*partial),
            _ => None,
        }
    }
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsolvableRegion { remaining, .. } => {
                let cells: Vec<String> = remaining.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Following {} locations must still be filled: [{}]",
                    remaining.len(),
                    cells.join(", ")
                )
            }
            Self::InvalidOrientation { value } => {
                write!(
                    f,
                    "Unknown orientation '{value}' (expected studs-out, studs-top or studs-right)"
                )
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<std::io::Error> for MosaicError {
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
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
