//! Error types for funcplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for funcplot operations.
pub type Result<T> = std::result::Result<T, FuncplotError>;

/// Errors that can occur in funcplot.
#[derive(Debug, Error)]
pub enum FuncplotError {
    /// Selection index outside the registry bounds.
    #[error("Function index {index} out of range (registry holds {len})")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of registered functions.
        len: usize,
    },

    /// Failed to open the log file.
    #[error("Failed to open log file: {path}")]
    LogFile {
        /// Path passed on the command line.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}

impl FuncplotError {
    /// Create an OutOfRange error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Create a LogFile error.
    pub fn log_file(path: PathBuf, source: std::io::Error) -> Self {
        Self::LogFile { path, source }
    }
}
