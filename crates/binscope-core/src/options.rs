//! Configuration options for loading point cloud dumps.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::DEFAULT_APPROXIMATE_SLACK;

/// Options controlling one load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Force a catalog stride instead of detecting one.
    pub stride_override: Option<usize>,

    /// Remainder tolerance for approximate stride matches.
    pub approximate_slack: usize,

    /// Stop decoding after this many points (None = unlimited).
    pub max_points: Option<usize>,

    /// Name of the color map used for intensity coloring.
    pub color_map: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            stride_override: None,
            approximate_slack: DEFAULT_APPROXIMATE_SLACK,
            max_points: None,
            color_map: "intensity".to_string(),
        }
    }
}

impl LoadOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the record stride.
    pub fn with_stride_override(mut self, stride: usize) -> Self {
        self.stride_override = Some(stride);
        self
    }

    /// Sets the approximate-match slack.
    pub fn with_approximate_slack(mut self, slack: usize) -> Self {
        self.approximate_slack = slack;
        self
    }

    /// Caps the number of decoded points.
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = Some(max_points);
        self
    }

    /// Selects the color map.
    pub fn with_color_map(mut self, name: impl Into<String>) -> Self {
        self.color_map = name.into();
        self
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
