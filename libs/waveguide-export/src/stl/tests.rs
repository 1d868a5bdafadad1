//! # Binary STL Tests

use super::*;
use glam::DVec3;
use std::io;

fn unit_triangle() -> Triangle {
    Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y)
}

fn f32_at(bytes: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

#[test]
fn test_layout() {
    let bytes = encode_stl(&[unit_triangle(), unit_triangle()], "horn").unwrap();
    assert_eq!(bytes.len(), 84 + 2 * 50);
    assert_eq!(&bytes[..4], b"horn");
    assert!(bytes[4..80].iter().all(|&b| b == 0));
    assert_eq!(&bytes[80..84], &2u32.to_le_bytes());

    // Normal, then the three corners
    assert_eq!(f32_at(&bytes, 84 + 8), 1.0);
    assert_eq!(f32_at(&bytes, 84 + 24), 1.0);
    assert_eq!(f32_at(&bytes, 84 + 40), 1.0);
    assert_eq!(&bytes[84 + 48..84 + 50], &[0, 0]);
}

#[test]
fn test_empty_mesh() {
    let bytes = encode_stl(&[], "").unwrap();
    assert_eq!(bytes.len(), 84);
    assert_eq!(&bytes[80..84], &[0, 0, 0, 0]);
    assert!(decode_stl(&bytes).unwrap().triangles.is_empty());
}

#[test]
fn test_long_header_truncated() {
    let header = "x".repeat(120);
    let bytes = encode_stl(&[unit_triangle()], &header).unwrap();
    assert_eq!(bytes.len(), 134);
    assert!(bytes[..80].iter().all(|&b| b == b'x'));
    assert_eq!(&bytes[80..84], &1u32.to_le_bytes());
}

#[test]
fn test_degenerate_triangle_written_with_default_normal() {
    let p = DVec3::new(4.0, 5.0, 6.0);
    let bytes = encode_stl(&[Triangle::new(p, p, p)], "").unwrap();
    let mesh = decode_stl(&bytes).unwrap();
    assert_eq!(mesh.triangles[0].normal, [0.0, 0.0, 1.0]);
    assert_eq!(mesh.triangles[0].vertices[2], [4.0, 5.0, 6.0]);
}

#[test]
fn test_decode_reads_back() {
    let t = Triangle::new(
        DVec3::new(1.5, -2.0, 3.25),
        DVec3::new(0.0, 4.0, 0.5),
        DVec3::new(-1.0, 0.0, 8.0),
    );
    let bytes = encode_stl(&[t], "waveguide").unwrap();
    let mesh = decode_stl(&bytes).unwrap();
    assert_eq!(mesh.header_text(), "waveguide");
    assert_eq!(mesh.triangles.len(), 1);
    assert_eq!(mesh.triangles[0].vertices[0], [1.5, -2.0, 3.25]);
    let n = t.normal().as_vec3();
    assert_eq!(mesh.triangles[0].normal, [n.x, n.y, n.z]);
}

#[test]
fn test_decode_rejects_short_buffer() {
    assert!(matches!(
        decode_stl(&[0u8; 60]),
        Err(ExportError::InvalidStl { .. })
    ));
}

#[test]
fn test_decode_rejects_count_mismatch() {
    let mut bytes = encode_stl(&[unit_triangle()], "").unwrap();
    bytes[80] = 2;
    assert!(matches!(decode_stl(&bytes), Err(ExportError::InvalidStl { .. })));

    let mut truncated = encode_stl(&[unit_triangle()], "").unwrap();
    truncated.pop();
    assert!(decode_stl(&truncated).is_err());
}

#[test]
fn test_write_matches_encode() {
    let triangles = [unit_triangle(), Triangle::new(DVec3::Z, DVec3::X, DVec3::Y)];
    let mut sink = Vec::new();
    write_stl(&mut sink, &triangles, "same").unwrap();
    assert_eq!(sink, encode_stl(&triangles, "same").unwrap());
}

struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_surfaces_io_errors() {
    let result = write_stl(&mut FailingWriter, &[unit_triangle()], "");
    assert!(matches!(result, Err(ExportError::Io(_))));
}
