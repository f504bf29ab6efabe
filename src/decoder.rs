//! VGI volume decoding - main API for turning a `.vgi` file into a [`Volume`]

use crate::config::DecodeOptions;
use crate::error::{Result, VgiError};
use crate::io::load_raw;
use crate::metadata::VolumeDescriptor;
use crate::parser::{parse_metadata_file, ParseWarning};
use crate::volume::Volume;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of a decode together with what was learned along the way
#[derive(Debug, Clone)]
pub struct DecodedVolume {
    pub volume: Volume,
    pub descriptor: VolumeDescriptor,
    /// Resolved path of the raw data file
    pub data_path: PathBuf,
    /// Metadata lines that were skipped
    pub warnings: Vec<ParseWarning>,
}

/// Decoder for VGI metadata/raw data pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct VgiDecoder {
    options: DecodeOptions,
}

impl VgiDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode the volume described by the metadata file at `path`
    pub fn decode(&self, path: impl AsRef<Path>) -> Result<Volume> {
        self.decode_with_report(path).map(|decoded| decoded.volume)
    }

    /// Decode and also return the descriptor, raw path and parse warnings
    pub fn decode_with_report(&self, path: impl AsRef<Path>) -> Result<DecodedVolume> {
        let path = path.as_ref();
        let parsed = parse_metadata_file(path)?;

        if self.options.strict {
            if let Some(warning) = parsed.warnings.first() {
                return Err(VgiError::Parse(warning.clone()));
            }
        }

        let descriptor = parsed.to_descriptor(self.options.byte_order)?;
        let data_path = descriptor.resolve_data_path(path)?;
        debug!(
            metadata = %path.display(),
            data = %data_path.display(),
            "resolved raw data file"
        );

        let volume = load_raw(&data_path, descriptor.layout(), descriptor.byte_order())?;
        info!(
            path = %path.display(),
            warnings = parsed.warnings.len(),
            "decoded {}",
            descriptor.layout().summary()
        );

        Ok(DecodedVolume {
            volume,
            descriptor,
            data_path,
            warnings: parsed.warnings,
        })
    }

    /// Decode on tokio's blocking pool
    ///
    /// Dropping the returned future abandons the result; the read itself runs
    /// to completion in the background.
    pub async fn decode_async(&self, path: impl Into<PathBuf>) -> Result<Volume> {
        let decoder = *self;
        let path = path.into();
        tokio::task::spawn_blocking(move || decoder.decode(path))
            .await
            .map_err(|e| VgiError::Task(e.to_string()))?
    }
}

/// Decode a VGI volume with default options
pub fn decode_volume(path: impl AsRef<Path>) -> Result<Volume> {
    VgiDecoder::default().decode(path)
}

/// Decode a VGI volume with default options from async code
pub async fn decode_volume_async(path: impl Into<PathBuf>) -> Result<Volume> {
    VgiDecoder::default().decode_async(path).await
}
