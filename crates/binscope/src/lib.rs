//! binscope: load raw LiDAR `.bin` dumps and prepare them for rendering.
//!
//! A `.bin` file is a headerless sequence of fixed-size little-endian records.
//! The record size is inferred from the file length, each record is decoded
//! into a [`Point`], and the points are colored by intensity and packed into
//! flat buffers ready for GPU upload.
//!
//! # Quick Start
//!
//! ```no_run
//! use binscope::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let cloud = load_file("scan.bin", &LoadOptions::default())?;
//!     println!("{}", cloud.summary());
//!
//!     // Positions and colors, three floats per point
//!     let positions: &[u8] = cloud.buffers.positions_bytes();
//!     let colors: &[u8] = cloud.buffers.colors_bytes();
//!     println!("{} + {} bytes to upload", positions.len(), colors.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! - [`detect`] / [`resolve`] pick the record stride and report per-candidate remainders
//! - [`decode`] reads points, skipping records that are truncated or non-finite
//! - [`colorize`] maps normalized intensity onto the black-blue-cyan-yellow-red ramp
//! - [`RenderBuffers`] and [`ViewFit`] hold what a viewer needs to draw the cloud
//!
//! [`load_bytes`] and [`load_file`] run all of these in order.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod init;
pub mod mock;
mod pipeline;

// Re-export core types
pub use binscope_core::{
    candidate, decode, decode_record, decode_with_limit, detect, detect_with, encode, resolve,
    BinscopeError, Bounds, DecodeReport, DetectionResult, FormatCandidate, FormatDiagnostics,
    LoadOptions, Point, RecordReadError, RemainderDiagnostic, Result, Vec3,
    DEFAULT_APPROXIMATE_SLACK, FORMAT_CATALOG, MIN_RECORD_BYTES,
};

// Re-export render types
pub use binscope_render::{
    colorize, colorize_in_range, colorize_with, CloudStats, ColorMap, ColorMapRegistry,
    IntensityRange, PointVertex, RenderBuffers, ViewFit, INTENSITY_COLOR_MAP,
};

pub use init::init_logging;
pub use mock::MockSceneConfig;
pub use pipeline::{load_bytes, load_file, LoadedCloud};
