//! Error types for binscope.

use thiserror::Error;

use crate::format::FormatDiagnostics;

/// The main error type for binscope operations.
#[derive(Error, Debug)]
pub enum BinscopeError {
    /// No catalog stride divides the input exactly or within the approximate slack.
    #[error("unrecognized point cloud format ({total_bytes} bytes)\n{diagnostics}")]
    UnrecognizedFormat {
        total_bytes: usize,
        diagnostics: FormatDiagnostics,
    },

    /// A stride that is not part of the format catalog was requested.
    #[error("stride {0} is not a known point record layout")]
    InvalidStride(usize),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Failure to read a single point record.
///
/// These never abort a decode: the record is dropped and counted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordReadError {
    /// A field read would run past the end of the buffer.
    #[error("record {index}: field at byte {offset}..{end} exceeds buffer of {len} bytes")]
    OutOfBounds {
        index: usize,
        offset: usize,
        end: usize,
        len: usize,
    },

    /// A required field decoded to NaN or infinity.
    #[error("record {index}: field '{field}' is not finite")]
    NonFinite { index: usize, field: &'static str },
}

/// A specialized Result type for binscope operations.
pub type Result<T> = std::result::Result<T, BinscopeError>;
