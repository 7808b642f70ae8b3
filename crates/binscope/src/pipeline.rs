//! The full load pipeline: detect, decode, colorize, pack.

use std::path::Path;

use binscope_core::{
    decode_with_limit, resolve, Bounds, DetectionResult, LoadOptions, Point, Result,
};
use binscope_render::{
    colorize_in_range, CloudStats, ColorMapRegistry, IntensityRange, RenderBuffers, ViewFit,
};
use glam::Vec3;

/// Everything derived from one `.bin` buffer.
///
/// Each load produces a fresh value; nothing is shared between loads.
#[derive(Debug, Clone)]
pub struct LoadedCloud {
    /// How the record stride was chosen, with the per-candidate remainders.
    pub detection: DetectionResult,
    /// Decoded points in file order.
    pub points: Vec<Point>,
    /// Whole records in the buffer.
    pub expected: usize,
    /// Records that could not be read.
    pub skipped: usize,
    /// Extents and intensity range.
    pub stats: CloudStats,
    /// One color per point.
    pub colors: Vec<Vec3>,
    /// Flat arrays for the renderer.
    pub buffers: RenderBuffers,
    /// Initial camera pose.
    pub view: ViewFit,
}

impl LoadedCloud {
    /// Number of decoded points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Spatial extents of the decoded points.
    pub fn bounds(&self) -> Bounds {
        self.stats.bounds
    }

    /// Intensity range, `None` when nothing was decoded.
    pub fn intensity_range(&self) -> Option<IntensityRange> {
        self.stats.intensity
    }

    /// One-line status, e.g. `12000/12000 points, XYZ+Intensity (4 floats) (16 bytes/point)`.
    pub fn summary(&self) -> String {
        format!(
            "{}/{} points, {}",
            self.num_points(),
            self.expected,
            self.detection.label()
        )
    }
}

/// Runs the pipeline over an in-memory buffer.
///
/// Only format resolution can fail; unreadable records are skipped.
/// With `max_points` set, decoding stops after that many points.
pub fn load_bytes(bytes: &[u8], options: &LoadOptions) -> Result<LoadedCloud> {
    let detection = resolve(bytes.len(), options)?;
    log::info!("detected format: {}", detection.label());

    let report = decode_with_limit(bytes, detection.stride_bytes, options.max_points);
    let stats = CloudStats::from_points(&report.points);

    let color_map = ColorMapRegistry::new().get_or_intensity(&options.color_map);
    let colors = match stats.intensity {
        Some(range) => colorize_in_range(&report.points, range, &color_map),
        None => Vec::new(),
    };

    let buffers = RenderBuffers::try_build(&report.points, &colors)?;
    let view = ViewFit::from_bounds(&stats.bounds);

    Ok(LoadedCloud {
        detection,
        points: report.points,
        expected: report.expected,
        skipped: report.skipped,
        stats,
        colors,
        buffers,
        view,
    })
}

/// Reads `path` into memory and runs [`load_bytes`].
pub fn load_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<LoadedCloud> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    log::info!("loading {} ({} bytes)", path.display(), bytes.len());
    load_bytes(&bytes, options)
}
