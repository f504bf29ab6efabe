//! Decoder configuration

use crate::error::Result;
use crate::types::ByteOrder;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling how a VGI volume is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Byte order of the raw samples
    pub byte_order: ByteOrder,

    /// Treat skipped metadata lines as fatal
    pub strict: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw sample byte order
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Enable or disable strict metadata parsing
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load options from a JSON document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
