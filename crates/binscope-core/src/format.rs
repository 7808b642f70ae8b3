//! Record layout catalog and stride detection.
//!
//! A raw `.bin` dump carries no header, so the record stride is guessed from
//! the total byte length alone. Every catalog stride is checked with a modulo
//! test; the resulting remainders are kept as a diagnostic table so an
//! operator can see why a layout was (or was not) picked and override it.

use std::fmt;

use serde::Serialize;

use crate::error::{BinscopeError, Result};
use crate::options::LoadOptions;

/// Bytes needed for the mandatory x, y, z, intensity fields.
pub const MIN_RECORD_BYTES: usize = 16;

/// Remainder tolerance used for approximate matches.
pub const DEFAULT_APPROXIMATE_SLACK: usize = 4;

/// A known fixed-size point record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatCandidate {
    pub stride_bytes: usize,
    pub description: &'static str,
}

/// Known layouts in ascending stride order. Detection depends on this order.
pub const FORMAT_CATALOG: [FormatCandidate; 7] = [
    FormatCandidate {
        stride_bytes: 12,
        description: "XYZ (3 floats)",
    },
    FormatCandidate {
        stride_bytes: 16,
        description: "XYZ+Intensity (4 floats)",
    },
    FormatCandidate {
        stride_bytes: 18,
        description: "XYZ+Intensity+Timestamp (4.5 floats)",
    },
    FormatCandidate {
        stride_bytes: 20,
        description: "XYZ+Intensity+Timestamp+Ring (5 floats)",
    },
    FormatCandidate {
        stride_bytes: 22,
        description: "XYZ+Intensity+Timestamp+Ring+Extra (5.5 floats)",
    },
    FormatCandidate {
        stride_bytes: 24,
        description: "XYZ+Intensity+Timestamp+Ring+Extra2 (6 floats)",
    },
    FormatCandidate {
        stride_bytes: 32,
        description: "XYZ+Intensity+Timestamp+Ring+Extra3 (8 floats)",
    },
];

/// Looks up a catalog entry by stride.
pub fn candidate(stride_bytes: usize) -> Option<&'static FormatCandidate> {
    FORMAT_CATALOG.iter().find(|c| c.stride_bytes == stride_bytes)
}

/// Remainder of the input length for one catalog stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemainderDiagnostic {
    pub stride_bytes: usize,
    pub description: &'static str,
    pub remainder: usize,
}

impl RemainderDiagnostic {
    /// Returns true if the stride divides the input exactly.
    pub fn is_exact(&self) -> bool {
        self.remainder == 0
    }

    /// Returns true if the remainder is within `slack` bytes of a record boundary.
    pub fn is_close(&self, slack: usize) -> bool {
        self.remainder < slack || self.remainder + slack > self.stride_bytes
    }
}

/// Per-candidate remainders for one input length, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatDiagnostics {
    pub total_bytes: usize,
    pub entries: Vec<RemainderDiagnostic>,
}

impl FormatDiagnostics {
    /// Computes the remainder of `total_bytes` for every catalog stride.
    pub fn compute(total_bytes: usize) -> Self {
        let entries = FORMAT_CATALOG
            .iter()
            .map(|c| RemainderDiagnostic {
                stride_bytes: c.stride_bytes,
                description: c.description,
                remainder: total_bytes % c.stride_bytes,
            })
            .collect();
        Self {
            total_bytes,
            entries,
        }
    }
}

impl fmt::Display for FormatDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "file size: {} bytes", self.total_bytes)?;
        write!(f, "candidate formats:")?;
        for entry in &self.entries {
            write!(
                f,
                "\n  {}: {} bytes/point, remainder {} {}",
                entry.description,
                entry.stride_bytes,
                entry.remainder,
                if entry.is_exact() { "✓" } else { "✗" }
            )?;
        }
        Ok(())
    }
}

/// Outcome of stride detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    /// Always one of the [`FORMAT_CATALOG`] strides.
    pub stride_bytes: usize,
    pub description: &'static str,
    /// The stride does not divide the input exactly.
    pub is_approximate: bool,
    /// The stride was forced by the caller instead of detected.
    pub overridden: bool,
    pub diagnostics: FormatDiagnostics,
}

impl DetectionResult {
    /// Human readable label, e.g. for a status line.
    pub fn label(&self) -> String {
        let mut label = format!("{} ({} bytes/point)", self.description, self.stride_bytes);
        if self.overridden {
            label.push_str(" [override]");
        }
        if self.is_approximate {
            label.push_str(" [approximate]");
        }
        label
    }
}

/// Detects the record stride for an input of `total_bytes`.
///
/// The last exact match in catalog order wins. Without an exact match the
/// first candidate within [`DEFAULT_APPROXIMATE_SLACK`] bytes is used.
pub fn detect(total_bytes: usize) -> Result<DetectionResult> {
    detect_with(total_bytes, DEFAULT_APPROXIMATE_SLACK)
}

/// [`detect`] with a custom approximate-match slack.
pub fn detect_with(total_bytes: usize, slack: usize) -> Result<DetectionResult> {
    let diagnostics = FormatDiagnostics::compute(total_bytes);
    log::debug!("{diagnostics}");

    // Later exact matches win over earlier ones.
    let exact = diagnostics.entries.iter().rev().find(|e| e.is_exact());
    let chosen = match exact {
        Some(entry) => Some((*entry, false)),
        None => diagnostics
            .entries
            .iter()
            .find(|e| e.is_close(slack))
            .map(|entry| (*entry, true)),
    };

    let Some((entry, is_approximate)) = chosen else {
        return Err(BinscopeError::UnrecognizedFormat {
            total_bytes,
            diagnostics,
        });
    };

    if is_approximate {
        log::warn!(
            "no exact stride for {total_bytes} bytes, using approximate match {} ({} bytes/point)",
            entry.description,
            entry.stride_bytes
        );
    }

    Ok(DetectionResult {
        stride_bytes: entry.stride_bytes,
        description: entry.description,
        is_approximate,
        overridden: false,
        diagnostics,
    })
}

/// Resolves the stride for a load: the operator override if set, detection otherwise.
pub fn resolve(total_bytes: usize, options: &LoadOptions) -> Result<DetectionResult> {
    let Some(stride) = options.stride_override else {
        return detect_with(total_bytes, options.approximate_slack);
    };

    let candidate = candidate(stride).ok_or(BinscopeError::InvalidStride(stride))?;
    let diagnostics = FormatDiagnostics::compute(total_bytes);
    log::info!(
        "stride override: {} ({} bytes/point)",
        candidate.description,
        candidate.stride_bytes
    );

    Ok(DetectionResult {
        stride_bytes: candidate.stride_bytes,
        description: candidate.description,
        is_approximate: total_bytes % candidate.stride_bytes != 0,
        overridden: true,
        diagnostics,
    })
}
