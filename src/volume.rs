//! Decoded voxel grid

use crate::error::{Result, VgiError};
use crate::layout::VolumeLayout;
use crate::types::ValueRange;
use ndarray::{Array3, ArrayView3};

/// Dense 3D grid of 16-bit samples owned by the caller
///
/// `samples` always holds exactly `width * height * depth` values, slice-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    layout: VolumeLayout,
    samples: Vec<u16>,
}

impl Volume {
    /// Wrap a sample buffer, checking it matches the layout exactly
    pub fn new(layout: VolumeLayout, samples: Vec<u16>) -> Result<Self> {
        if samples.len() != layout.total_voxels() {
            return Err(VgiError::InvalidDimensions(format!(
                "Data size mismatch: {} needs {} samples, got {}",
                layout.summary(),
                layout.total_voxels(),
                samples.len()
            )));
        }
        Ok(Self { layout, samples })
    }

    pub fn layout(&self) -> VolumeLayout {
        self.layout
    }

    pub fn width(&self) -> usize {
        self.layout.width()
    }

    pub fn height(&self) -> usize {
        self.layout.height()
    }

    pub fn depth(&self) -> usize {
        self.layout.depth()
    }

    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Sample at `(x, y, z)`
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<u16> {
        self.layout.index(x, y, z).map(|i| self.samples[i])
    }

    /// All samples of slice `z`, row-major
    pub fn slice(&self, z: usize) -> Option<&[u16]> {
        if z >= self.depth() {
            return None;
        }
        let start = self.layout.slice_offset(z);
        self.samples.get(start..start + self.layout.voxels_per_slice())
    }

    /// Index of the slice a viewer would show first
    pub fn middle_slice_index(&self) -> usize {
        self.depth() / 2
    }

    /// Smallest and largest sample value
    pub fn value_range(&self) -> Option<ValueRange> {
        ValueRange::of(&self.samples)
    }

    /// Samples reinterpreted as signed 16-bit values
    pub fn signed_samples(&self) -> impl Iterator<Item = i16> + '_ {
        self.samples.iter().map(|&v| v as i16)
    }

    /// Borrow the samples as a `(depth, height, width)` array
    pub fn as_array(&self) -> Result<ArrayView3<'_, u16>> {
        ArrayView3::from_shape(self.shape(), &self.samples)
            .map_err(|e| VgiError::InvalidDimensions(e.to_string()))
    }

    /// Convert into an owned `(depth, height, width)` array
    pub fn into_array(self) -> Result<Array3<u16>> {
        let shape = self.shape();
        Array3::from_shape_vec(shape, self.samples)
            .map_err(|e| VgiError::InvalidDimensions(e.to_string()))
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.depth(), self.height(), self.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_volume() -> Volume {
        let layout = VolumeLayout::new(4, 3, 2).unwrap();
        Volume::new(layout, (0..24).collect()).unwrap()
    }

    #[test]
    fn test_sample_count_checked() {
        let layout = VolumeLayout::new(4, 3, 2).unwrap();
        assert!(Volume::new(layout, vec![0; 23]).is_err());
        assert!(Volume::new(layout, vec![0; 25]).is_err());
    }

    #[test]
    fn test_voxel_access() {
        let volume = create_test_volume();
        assert_eq!(volume.get(0, 0, 0), Some(0));
        assert_eq!(volume.get(3, 2, 0), Some(11));
        assert_eq!(volume.get(0, 0, 1), Some(12));
        assert_eq!(volume.get(2, 1, 1), Some(18));
        assert_eq!(volume.get(0, 3, 0), None);
    }

    #[test]
    fn test_slices() {
        let volume = create_test_volume();
        assert_eq!(volume.slice(1).unwrap(), &(12..24).collect::<Vec<u16>>()[..]);
        assert!(volume.slice(2).is_none());
        assert_eq!(volume.middle_slice_index(), 1);
    }

    #[test]
    fn test_value_range_and_signed() {
        let layout = VolumeLayout::new(2, 1, 1).unwrap();
        let volume = Volume::new(layout, vec![0xFFFF, 7]).unwrap();
        assert_eq!(volume.value_range(), Some(ValueRange::new(7, 0xFFFF)));
        assert_eq!(volume.signed_samples().collect::<Vec<_>>(), vec![-1, 7]);
    }

    #[test]
    fn test_array_views() {
        let volume = create_test_volume();
        let view = volume.as_array().unwrap();
        assert_eq!(view.dim(), (2, 3, 4));
        assert_eq!(view[[1, 2, 1]], volume.get(1, 2, 1).unwrap());

        let owned = volume.into_array().unwrap();
        assert_eq!(owned[[0, 1, 3]], 7);
    }
}
