//! # Binary STL
//!
//! ## Layout
//!
//! ```text
//! offset  size     field
//! 0       80       header (free-form, zero padded)
//! 80      4        triangle count, u32 LE
//! 84      50 × N   records:
//!                    normal      3 × f32 LE
//!                    vertices    9 × f32 LE
//!                    attribute   u16 LE, always 0
//! ```
//!
//! Coordinates are narrowed from `f64` to `f32` on write.

use std::io::Write;

use config::constants::{stl_byte_len, STL_COUNT_LEN, STL_HEADER_LEN, STL_RECORD_LEN};

use crate::error::{ExportError, ExportResult};
use crate::triangulate::Triangle;

/// One triangle as stored in the file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StlTriangle {
    /// Stored face normal.
    pub normal: [f32; 3],
    /// Stored corners.
    pub vertices: [[f32; 3]; 3],
}

/// A decoded binary STL.
#[derive(Debug, Clone, PartialEq)]
pub struct StlMesh {
    /// Raw 80-byte header.
    pub header: [u8; STL_HEADER_LEN],
    /// Triangle records in file order.
    pub triangles: Vec<StlTriangle>,
}

impl StlMesh {
    /// Header text up to the first NUL byte, lossily decoded.
    pub fn header_text(&self) -> String {
        let end = self
            .header
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(STL_HEADER_LEN);
        String::from_utf8_lossy(&self.header[..end]).into_owned()
    }
}

/// Encodes `triangles` into a new buffer.
///
/// # Errors
///
/// [`ExportError::InvalidStl`] when the triangle count does not fit the
/// 32-bit count field.
pub fn encode_stl(triangles: &[Triangle], header: &str) -> ExportResult<Vec<u8>> {
    let count = triangle_count(triangles)?;
    let mut bytes = Vec::with_capacity(stl_byte_len(triangles.len()));
    bytes.extend_from_slice(&header_bytes(header));
    bytes.extend_from_slice(&count.to_le_bytes());
    for triangle in triangles {
        bytes.extend_from_slice(&encode_record(triangle));
    }
    Ok(bytes)
}

/// Streams `triangles` to `writer`.
///
/// # Errors
///
/// [`ExportError::Io`] when the writer fails, and
/// [`ExportError::InvalidStl`] when the count does not fit 32 bits.
pub fn write_stl<W: Write>(writer: &mut W, triangles: &[Triangle], header: &str) -> ExportResult<()> {
    let count = triangle_count(triangles)?;
    writer.write_all(&header_bytes(header))?;
    writer.write_all(&count.to_le_bytes())?;
    for triangle in triangles {
        writer.write_all(&encode_record(triangle))?;
    }
    writer.flush()?;
    Ok(())
}

/// Parses a binary STL buffer.
///
/// # Errors
///
/// [`ExportError::InvalidStl`] when the buffer is shorter than the header
/// or its length disagrees with the stored triangle count.
pub fn decode_stl(bytes: &[u8]) -> ExportResult<StlMesh> {
    let prefix = STL_HEADER_LEN + STL_COUNT_LEN;
    if bytes.len() < prefix {
        return Err(ExportError::invalid_stl(format!(
            "buffer of {} bytes is shorter than the {}-byte header",
            bytes.len(),
            prefix
        )));
    }

    let mut header = [0u8; STL_HEADER_LEN];
    header.copy_from_slice(&bytes[..STL_HEADER_LEN]);
    let mut count_bytes = [0u8; STL_COUNT_LEN];
    count_bytes.copy_from_slice(&bytes[STL_HEADER_LEN..prefix]);
    let count = u32::from_le_bytes(count_bytes) as usize;

    let expected = count
        .checked_mul(STL_RECORD_LEN)
        .and_then(|records| records.checked_add(prefix));
    if expected != Some(bytes.len()) {
        return Err(ExportError::invalid_stl(format!(
            "{} triangles do not fit a buffer of {} bytes",
            count,
            bytes.len()
        )));
    }

    let triangles = bytes[prefix..]
        .chunks_exact(STL_RECORD_LEN)
        .map(|record| {
            let v = |i: usize| {
                let at = i * 4;
                f32::from_le_bytes([record[at], record[at + 1], record[at + 2], record[at + 3]])
            };
            StlTriangle {
                normal: [v(0), v(1), v(2)],
                vertices: [[v(3), v(4), v(5)], [v(6), v(7), v(8)], [v(9), v(10), v(11)]],
            }
        })
        .collect();

    Ok(StlMesh { header, triangles })
}

fn triangle_count(triangles: &[Triangle]) -> ExportResult<u32> {
    u32::try_from(triangles.len()).map_err(|_| {
        ExportError::invalid_stl(format!("{} triangles exceed the u32 count field", triangles.len()))
    })
}

/// Header text truncated to 80 bytes and zero padded.
fn header_bytes(header: &str) -> [u8; STL_HEADER_LEN] {
    let mut bytes = [0u8; STL_HEADER_LEN];
    let text = header.as_bytes();
    let len = text.len().min(STL_HEADER_LEN);
    bytes[..len].copy_from_slice(&text[..len]);
    bytes
}

fn encode_record(triangle: &Triangle) -> [u8; STL_RECORD_LEN] {
    let mut record = [0u8; STL_RECORD_LEN];
    let normal = triangle.normal().as_vec3();
    let values = std::iter::once(normal).chain(triangle.vertices.iter().map(|v| v.as_vec3()));
    for (i, v) in values.enumerate() {
        let at = i * 12;
        record[at..at + 4].copy_from_slice(&v.x.to_le_bytes());
        record[at + 4..at + 8].copy_from_slice(&v.y.to_le_bytes());
        record[at + 8..at + 12].copy_from_slice(&v.z.to_le_bytes());
    }
    // Bytes 48..50 hold the attribute count, left at zero
    record
}

#[cfg(test)]
mod tests;
