//! Volume layout - dimensions of a voxel grid and its slice-major addressing

use crate::error::{Result, VgiError};
use crate::types::BYTES_PER_SAMPLE;
use crate::utils::format_bytes;
use serde::{Deserialize, Serialize};

/// Extents of a dense 3D voxel grid stored slice by slice
///
/// Samples are addressed with `z * width * height + y * width + x`: slices vary
/// slowest, columns fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LayoutFields")]
pub struct VolumeLayout {
    width: usize,
    height: usize,
    depth: usize,
}

/// Unchecked wire form, validated through [`VolumeLayout::new`]
#[derive(Deserialize)]
struct LayoutFields {
    width: usize,
    height: usize,
    depth: usize,
}

impl TryFrom<LayoutFields> for VolumeLayout {
    type Error = VgiError;

    fn try_from(fields: LayoutFields) -> Result<Self> {
        Self::new(fields.width, fields.height, fields.depth)
    }
}

impl VolumeLayout {
    /// Create a new layout, rejecting empty extents and sizes that overflow
    pub fn new(width: usize, height: usize, depth: usize) -> Result<Self> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(VgiError::InvalidDimensions(format!(
                "All dimensions must be positive, got {} x {} x {}",
                width, height, depth
            )));
        }

        let layout = Self {
            width,
            height,
            depth,
        };

        // Total byte count must be addressable
        layout
            .voxels_per_slice()
            .checked_mul(depth)
            .and_then(|v| v.checked_mul(BYTES_PER_SAMPLE))
            .ok_or_else(|| {
                VgiError::InvalidDimensions(format!(
                    "Volume of {} x {} x {} samples is too large",
                    width, height, depth
                ))
            })?;

        Ok(layout)
    }

    /// Create a layout from `[x, y, z]` sizes
    pub fn from_size(size: [usize; 3]) -> Result<Self> {
        Self::new(size[0], size[1], size[2])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Sizes as `[x, y, z]`
    pub fn size(&self) -> [usize; 3] {
        [self.width, self.height, self.depth]
    }

    /// Number of samples in one slice
    pub fn voxels_per_slice(&self) -> usize {
        self.width * self.height
    }

    /// Number of raw bytes in one slice
    pub fn slice_byte_count(&self) -> usize {
        self.voxels_per_slice() * BYTES_PER_SAMPLE
    }

    /// Total number of samples in the volume
    pub fn total_voxels(&self) -> usize {
        self.voxels_per_slice() * self.depth
    }

    /// Total size of the raw payload in bytes
    pub fn total_size_bytes(&self) -> usize {
        self.total_voxels() * BYTES_PER_SAMPLE
    }

    /// Offset of the first sample of slice `z`
    pub fn slice_offset(&self, z: usize) -> usize {
        z * self.voxels_per_slice()
    }

    /// Check if coordinates are within bounds
    pub fn is_in_bounds(&self, x: usize, y: usize, z: usize) -> bool {
        x < self.width && y < self.height && z < self.depth
    }

    /// Flat sample index of a voxel, `None` when out of bounds
    pub fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        if !self.is_in_bounds(x, y, z) {
            return None;
        }
        Some(self.slice_offset(z) + y * self.width + x)
    }

    /// Get a summary string of the layout
    pub fn summary(&self) -> String {
        format!(
            "3D Volume: {} x {} x {} (U16), {} slices of {}, {} uncompressed",
            self.width,
            self.height,
            self.depth,
            self.depth,
            format_bytes(self.slice_byte_count()),
            format_bytes(self.total_size_bytes())
        )
    }
}
