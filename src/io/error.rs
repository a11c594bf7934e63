//! Error types and context management for board and dictionary operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::cell::CellIndex;

/// Main error type for all board, search and dictionary operations
#[derive(Debug)]
pub enum HexwordError {
    /// Grid constructed with a zero or oversized side
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Explanation of why the dimensions are rejected
        reason: &'static str,
    },

    /// Direct grid access outside `[0, rows) x [0, cols)`
    IndexOutOfRange {
        /// The offending coordinate
        index: CellIndex,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
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

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Word list contained nothing long enough to insert
    EmptyDictionary {
        /// Path of the word list
        path: PathBuf,
    },
}

impl fmt::Display for HexwordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols, reason } => {
                write!(f, "Invalid grid dimensions {rows}x{cols}: {reason}")
            }
            Self::IndexOutOfRange { index, dimensions } => {
                write!(
                    f,
                    "Cell {index} is out of range for a {}x{} grid",
                    dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::EmptyDictionary { path } => {
                write!(f, "Word list '{}' contains no usable words", path.display())
            }
        }
    }
}

impl std::error::Error for HexwordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, HexwordError>;

/// Attaches the file being worked on to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`HexwordError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| HexwordError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for HexwordError {
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
) -> HexwordError {
    HexwordError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
