//! Render preparation for binscope.
//!
//! This crate turns decoded points into data a renderer can consume:
//! - Color maps, including the 4-band intensity ramp
//! - Intensity normalization and per-point coloring
//! - Flat position/color buffers for GPU upload
//! - Initial camera framing

#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod buffers;
pub mod color_maps;
pub mod colorize;
pub mod view;

pub use buffers::{PointVertex, RenderBuffers};
pub use color_maps::{ColorMap, ColorMapRegistry, INTENSITY_COLOR_MAP};
pub use colorize::{colorize, colorize_in_range, colorize_with, CloudStats, IntensityRange};
pub use view::ViewFit;
