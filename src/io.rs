//! Raw voxel payload loading
//!
//! A raw file is `depth` slices of `width * height` 2-byte samples with no
//! header. Each slice is read in full before it is converted; any slice that
//! comes up short aborts the load.

use crate::error::{Result, VgiError};
use crate::layout::VolumeLayout;
use crate::types::ByteOrder;
use crate::utils::decode_u16_samples;
use crate::volume::Volume;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Sequential reader turning a raw byte stream into a [`Volume`]
///
/// Buffers grow with the bytes actually delivered, so a stream far shorter
/// than its declared layout fails with [`VgiError::ShortRead`] without first
/// allocating the declared size.
pub struct RawVolumeReader<R: Read> {
    reader: R,
    layout: VolumeLayout,
    byte_order: ByteOrder,
    slice_bytes: Vec<u8>,
}

impl<R: Read> RawVolumeReader<R> {
    /// Create a new raw volume reader
    pub fn new(reader: R, layout: VolumeLayout, byte_order: ByteOrder) -> Self {
        Self {
            reader,
            layout,
            byte_order,
            slice_bytes: Vec::new(),
        }
    }

    /// Pull the next slice's bytes into the internal buffer
    fn fill_slice(&mut self, z: usize) -> Result<()> {
        let expected = self.layout.slice_byte_count();
        self.slice_bytes.clear();
        self.reader
            .by_ref()
            .take(expected as u64)
            .read_to_end(&mut self.slice_bytes)?;

        let actual = self.slice_bytes.len();
        if actual != expected {
            return Err(VgiError::ShortRead {
                slice: z,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Read slice `z` from the stream into `out`
    ///
    /// Slices must be requested in order; `z` only labels errors.
    pub fn read_slice(&mut self, z: usize, out: &mut [u16]) -> Result<()> {
        self.fill_slice(z)?;
        decode_u16_samples(&self.slice_bytes, self.byte_order, out)
    }

    /// Read every slice and assemble the volume
    pub fn read_volume(mut self) -> Result<Volume> {
        let layout = self.layout;
        let per_slice = layout.voxels_per_slice();
        let mut samples: Vec<u16> = Vec::new();

        for z in 0..layout.depth() {
            self.fill_slice(z)?;

            samples.try_reserve(per_slice).map_err(|e| {
                VgiError::InvalidDimensions(format!("Cannot allocate slice {}: {}", z, e))
            })?;
            let start = samples.len();
            samples.resize(start + per_slice, 0);
            decode_u16_samples(&self.slice_bytes, self.byte_order, &mut samples[start..])?;
        }

        Volume::new(layout, samples)
    }
}

/// Read a volume from any byte stream
pub fn read_volume<R: Read>(reader: R, layout: VolumeLayout, byte_order: ByteOrder) -> Result<Volume> {
    RawVolumeReader::new(reader, layout, byte_order).read_volume()
}

/// Load a raw data file from disk
///
/// A file shorter than the layout requires is rejected from its length alone.
/// The file handle is dropped on return, whether the load succeeded or not.
pub fn load_raw(path: &Path, layout: VolumeLayout, byte_order: ByteOrder) -> Result<Volume> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => VgiError::MissingFile(path.to_path_buf()),
        _ => VgiError::Io(e),
    })?;

    let file_len = file.metadata()?.len();
    let slice_bytes = layout.slice_byte_count() as u64;
    if file_len < layout.total_size_bytes() as u64 {
        return Err(VgiError::ShortRead {
            slice: (file_len / slice_bytes) as usize,
            expected: layout.slice_byte_count(),
            actual: (file_len % slice_bytes) as usize,
        });
    }

    debug!(path = %path.display(), %byte_order, "read data file");
    read_volume(BufReader::new(file), layout, byte_order)
}
