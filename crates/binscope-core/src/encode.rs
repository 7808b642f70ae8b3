//! Writing points back into fixed-stride records.

use crate::error::{BinscopeError, Result};
use crate::format::{candidate, MIN_RECORD_BYTES};
use crate::point::Point;

/// Encodes `points` as little-endian records of `stride` bytes.
///
/// The timestamp is written at byte 16 when the record has room for all four
/// bytes (stride >= 20), the ring at byte 20 when stride >= 22. Missing
/// optional fields and padding are written as zeros.
pub fn encode(points: &[Point], stride: usize) -> Result<Vec<u8>> {
    if candidate(stride).is_none() || stride < MIN_RECORD_BYTES {
        return Err(BinscopeError::InvalidStride(stride));
    }

    let mut buffer = vec![0u8; points.len() * stride];
    for (record, p) in buffer.chunks_exact_mut(stride).zip(points) {
        record[0..4].copy_from_slice(&p.x.to_le_bytes());
        record[4..8].copy_from_slice(&p.y.to_le_bytes());
        record[8..12].copy_from_slice(&p.z.to_le_bytes());
        record[12..16].copy_from_slice(&p.intensity.to_le_bytes());
        if stride >= 20 {
            record[16..20].copy_from_slice(&p.timestamp.unwrap_or(0.0).to_le_bytes());
        }
        if stride >= 22 {
            record[20..22].copy_from_slice(&p.ring.unwrap_or(0).to_le_bytes());
        }
    }
    Ok(buffer)
}
