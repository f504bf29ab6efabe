//! Volume descriptor recovered from VGI metadata

use crate::error::{Result, VgiError};
use crate::layout::VolumeLayout;
use crate::types::{ByteOrder, SUPPORTED_BITS_PER_ELEMENT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything the loader needs to read a raw payload
///
/// Built once from parsed metadata and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DescriptorFields")]
pub struct VolumeDescriptor {
    data_file_name: String,
    layout: VolumeLayout,
    bits_per_element: u32,
    byte_order: ByteOrder,
}

/// Unchecked wire form, validated through [`VolumeDescriptor::new`]
#[derive(Deserialize)]
struct DescriptorFields {
    data_file_name: String,
    layout: VolumeLayout,
    bits_per_element: u32,
    byte_order: ByteOrder,
}

impl TryFrom<DescriptorFields> for VolumeDescriptor {
    type Error = VgiError;

    fn try_from(fields: DescriptorFields) -> Result<Self> {
        Self::new(
            fields.data_file_name,
            fields.layout.size(),
            fields.bits_per_element,
            fields.byte_order,
        )
    }
}

impl VolumeDescriptor {
    /// Create a descriptor, checking every field the loader depends on
    pub fn new(
        data_file_name: impl Into<String>,
        size: [usize; 3],
        bits_per_element: u32,
        byte_order: ByteOrder,
    ) -> Result<Self> {
        let data_file_name = data_file_name.into();
        if data_file_name.trim().is_empty() {
            return Err(VgiError::InvalidDescriptor(
                "missing raw data file name".to_string(),
            ));
        }

        if bits_per_element != SUPPORTED_BITS_PER_ELEMENT {
            return Err(VgiError::InvalidDescriptor(format!(
                "unsupported bits per element: {}",
                bits_per_element
            )));
        }

        let layout = VolumeLayout::from_size(size)
            .map_err(|e| VgiError::InvalidDescriptor(e.to_string()))?;

        Ok(Self {
            data_file_name,
            layout,
            bits_per_element,
            byte_order,
        })
    }

    /// Raw data file name exactly as written in the metadata
    pub fn data_file_name(&self) -> &str {
        &self.data_file_name
    }

    pub fn layout(&self) -> VolumeLayout {
        self.layout
    }

    /// Sizes as `[x, y, z]`
    pub fn size(&self) -> [usize; 3] {
        self.layout.size()
    }

    pub fn bits_per_element(&self) -> u32 {
        self.bits_per_element
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Locate the raw data file next to the metadata file
    ///
    /// Directory components in the recorded name (either separator style) are
    /// dropped; only the final file name is joined to the metadata directory.
    pub fn resolve_data_path(&self, metadata_path: &Path) -> Result<PathBuf> {
        let file_name = self
            .data_file_name
            .trim()
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default();

        if file_name.is_empty() || file_name == "." || file_name == ".." {
            return Err(VgiError::InvalidDescriptor(format!(
                "raw data file name has no file component: {:?}",
                self.data_file_name
            )));
        }

        let directory = metadata_path.parent().unwrap_or_else(|| Path::new(""));
        Ok(directory.join(file_name))
    }
}
