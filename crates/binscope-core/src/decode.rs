//! Fixed-stride record decoding.
//!
//! Record layout (little-endian):
//!
//! | Offset | Field     | Type | Read when                  |
//! |--------|-----------|------|----------------------------|
//! | 0      | x         | f32  | always                     |
//! | 4      | y         | f32  | always                     |
//! | 8      | z         | f32  | always                     |
//! | 12     | intensity | f32  | always                     |
//! | 16     | timestamp | f32  | stride >= 18 and in bounds |
//! | 20     | ring      | u16  | stride >= 20 and in bounds |
//!
//! Bad records are dropped one at a time; a decode never fails as a whole.

use crate::error::RecordReadError;
use crate::format::MIN_RECORD_BYTES;
use crate::point::Point;

const TIMESTAMP_OFFSET: usize = 16;
const RING_OFFSET: usize = 20;
const TIMESTAMP_MIN_STRIDE: usize = 18;
const RING_MIN_STRIDE: usize = 20;

/// Points decoded from one buffer, plus what was lost on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeReport {
    /// Decoded points in file order.
    pub points: Vec<Point>,
    /// Number of whole records in the buffer (`len / stride`).
    pub expected: usize,
    /// Records dropped because they could not be read.
    pub skipped: usize,
}

impl DecodeReport {
    /// Number of decoded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Decodes every record of `buffer` using a fixed `stride`.
pub fn decode(buffer: &[u8], stride: usize) -> DecodeReport {
    decode_with_limit(buffer, stride, None)
}

/// [`decode`] that stops once `max_points` points have been produced.
pub fn decode_with_limit(buffer: &[u8], stride: usize, max_points: Option<usize>) -> DecodeReport {
    if stride == 0 {
        log::warn!("cannot decode with a zero stride");
        return DecodeReport::default();
    }

    let expected = buffer.len() / stride;
    let capacity = max_points.map_or(expected, |max| max.min(expected));
    let mut report = DecodeReport {
        points: Vec::with_capacity(capacity),
        expected,
        skipped: 0,
    };

    for index in 0..expected {
        if max_points.is_some_and(|max| report.points.len() >= max) {
            log::info!("point limit of {capacity} reached, stopping at record {index}");
            break;
        }

        match decode_record(buffer, index, stride) {
            Ok(point) => report.points.push(point),
            Err(err) => {
                log::warn!("skipping {err}");
                report.skipped += 1;
            }
        }
    }

    log::info!(
        "decoded {}/{} points ({} skipped)",
        report.points.len(),
        expected,
        report.skipped
    );
    report
}

/// Decodes record `index`.
pub fn decode_record(buffer: &[u8], index: usize, stride: usize) -> Result<Point, RecordReadError> {
    let len = buffer.len();
    let offset = index * stride;

    if offset + MIN_RECORD_BYTES > len {
        return Err(RecordReadError::OutOfBounds {
            index,
            offset,
            end: offset + MIN_RECORD_BYTES,
            len,
        });
    }

    let mut point = Point::new(
        read_f32_le(buffer, index, offset)?,
        read_f32_le(buffer, index, offset + 4)?,
        read_f32_le(buffer, index, offset + 8)?,
        read_f32_le(buffer, index, offset + 12)?,
    );

    if let Some(field) = point.first_non_finite() {
        return Err(RecordReadError::NonFinite { index, field });
    }

    // Both guards only reserve two bytes past the field start. A 4-byte
    // timestamp can still run off the end, which drops the record.
    if stride >= TIMESTAMP_MIN_STRIDE && offset + TIMESTAMP_OFFSET + 2 <= len {
        point.timestamp = Some(read_f32_le(buffer, index, offset + TIMESTAMP_OFFSET)?);
    }
    if stride >= RING_MIN_STRIDE && offset + RING_OFFSET + 2 <= len {
        point.ring = Some(read_u16_le(buffer, index, offset + RING_OFFSET)?);
    }

    Ok(point)
}

fn field<const N: usize>(
    buffer: &[u8],
    index: usize,
    offset: usize,
) -> Result<[u8; N], RecordReadError> {
    buffer
        .get(offset..offset + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(RecordReadError::OutOfBounds {
            index,
            offset,
            end: offset + N,
            len: buffer.len(),
        })
}

fn read_f32_le(buffer: &[u8], index: usize, offset: usize) -> Result<f32, RecordReadError> {
    field::<4>(buffer, index, offset).map(f32::from_le_bytes)
}

fn read_u16_le(buffer: &[u8], index: usize, offset: usize) -> Result<u16, RecordReadError> {
    field::<2>(buffer, index, offset).map(u16::from_le_bytes)
}
