//! Utility functions

use crate::error::{Result, VgiError};
use crate::types::{ByteOrder, BYTES_PER_SAMPLE};
use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

/// Convert raw bytes to 16-bit samples in the given byte order
///
/// `out` must hold exactly half as many samples as `bytes` has bytes.
pub fn decode_u16_samples(bytes: &[u8], order: ByteOrder, out: &mut [u16]) -> Result<()> {
    if bytes.len() != out.len() * BYTES_PER_SAMPLE {
        return Err(VgiError::InvalidDimensions(format!(
            "Cannot decode {} bytes into {} samples",
            bytes.len(),
            out.len()
        )));
    }

    match order {
        ByteOrder::LittleEndian => LittleEndian::read_u16_into(bytes, out),
        ByteOrder::BigEndian => BigEndian::read_u16_into(bytes, out),
    }

    Ok(())
}

/// Convert 16-bit samples to raw bytes in the given byte order
pub fn encode_u16_samples(samples: &[u16], order: ByteOrder) -> Vec<u8> {
    let mut bytes = vec![0u8; samples.len() * BYTES_PER_SAMPLE];
    match order {
        ByteOrder::LittleEndian => LittleEndian::write_u16_into(samples, &mut bytes),
        ByteOrder::BigEndian => BigEndian::write_u16_into(samples, &mut bytes),
    }
    bytes
}

/// Format byte size in human-readable form
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB", "PB"];

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_little_endian() {
        let bytes = [0x00, 0x01, 0x34, 0x12, 0xFF, 0xFF];
        let mut out = [0u16; 3];
        decode_u16_samples(&bytes, ByteOrder::LittleEndian, &mut out).unwrap();
        assert_eq!(out, [0x0100, 0x1234, 0xFFFF]);
    }

    #[test]
    fn test_decode_big_endian() {
        let bytes = [0x00, 0x01, 0x34, 0x12, 0x80, 0x00];
        let mut out = [0u16; 3];
        decode_u16_samples(&bytes, ByteOrder::BigEndian, &mut out).unwrap();
        assert_eq!(out, [0x0001, 0x3412, 0x8000]);
    }

    #[test]
    fn test_high_bit_bytes_are_unsigned() {
        // 0x80..0xFF must not sign-extend into the high byte
        let mut out = [0u16; 1];
        decode_u16_samples(&[0xFE, 0x7F], ByteOrder::LittleEndian, &mut out).unwrap();
        assert_eq!(out[0], 0x7FFE);
        decode_u16_samples(&[0x7F, 0xFE], ByteOrder::BigEndian, &mut out).unwrap();
        assert_eq!(out[0], 0x7FFE);
    }

    #[test]
    fn test_full_range_round_trip() {
        let samples: Vec<u16> = (0..=u16::MAX).collect();
        for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            let bytes = encode_u16_samples(&samples, order);
            assert_eq!(bytes.len(), samples.len() * 2);

            let mut decoded = vec![0u16; samples.len()];
            decode_u16_samples(&bytes, order, &mut decoded).unwrap();
            assert_eq!(decoded, samples);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let mut out = [0u16; 2];
        assert!(decode_u16_samples(&[0, 1, 2], ByteOrder::LittleEndian, &mut out).is_err());
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
        assert_eq!(format_bytes(1073741824), "1.00 GB");
    }
}
