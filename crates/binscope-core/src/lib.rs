//! Core types for binscope.
//!
//! This crate turns a raw, headerless LiDAR `.bin` dump into points:
//! - [`detect`] guesses the record stride from the byte length
//! - [`decode`] reads fixed-stride records into [`Point`]s, dropping bad ones
//! - [`encode`] writes points back out in the same layout
//! - [`LoadOptions`] carries per-load configuration

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod options;
pub mod point;

pub use decode::{decode, decode_record, decode_with_limit, DecodeReport};
pub use encode::encode;
pub use error::{BinscopeError, RecordReadError, Result};
pub use format::{
    candidate, detect, detect_with, resolve, DetectionResult, FormatCandidate, FormatDiagnostics,
    RemainderDiagnostic, DEFAULT_APPROXIMATE_SLACK, FORMAT_CATALOG, MIN_RECORD_BYTES,
};
pub use options::LoadOptions;
pub use point::{Bounds, Point};

// Re-export glam types for convenience
pub use glam::Vec3;
