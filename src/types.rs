//! Core data types for VGI volumes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bits per element supported by the decoder
pub const SUPPORTED_BITS_PER_ELEMENT: u32 = 16;

/// Bytes used by one stored sample
pub const BYTES_PER_SAMPLE: usize = 2;

/// Byte order of the 2-byte samples in a raw data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Least significant byte first (the VGI profile handled here)
    #[default]
    LittleEndian,
    /// Most significant byte first
    BigEndian,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::LittleEndian => f.write_str("little-endian"),
            ByteOrder::BigEndian => f.write_str("big-endian"),
        }
    }
}

/// Value range of the samples of a volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u16,
    pub max: u16,
}

impl ValueRange {
    pub fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Compute the range of a sample buffer, `None` when it is empty
    pub fn of(samples: &[u16]) -> Option<Self> {
        let (&first, rest) = samples.split_first()?;
        let range = rest.iter().fold(Self::new(first, first), |acc, &v| {
            Self::new(acc.min.min(v), acc.max.max(v))
        });
        Some(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_byte_order() {
        assert_eq!(ByteOrder::default(), ByteOrder::LittleEndian);
    }

    #[test]
    fn test_byte_order_serde() {
        let json = serde_json::to_string(&ByteOrder::BigEndian).unwrap();
        assert_eq!(json, "\"big_endian\"");
        let parsed: ByteOrder = serde_json::from_str("\"little_endian\"").unwrap();
        assert_eq!(parsed, ByteOrder::LittleEndian);
    }

    #[test]
    fn test_value_range() {
        assert_eq!(ValueRange::of(&[]), None);

        let range = ValueRange::of(&[300, 12, 0xFFFF, 40]).unwrap();
        assert_eq!(range, ValueRange::new(12, 0xFFFF));
    }
}
