//! vgi-volume - VG Studio Max volume decoding
//!
//! A pure Rust decoder for volumes exported as a `.vgi` metadata file plus a
//! headerless raw file of 16-bit samples.
//!
//! # Features
//!
//! - Line-oriented VGI metadata parsing with non-fatal warnings
//! - Slice-by-slice raw payload loading with exact byte-count checks
//! - Little- and big-endian sample conversion
//! - Dense `Volume` result with `ndarray` views
//! - Async wrapper running the blocking decode on tokio's blocking pool
//!
//! # Example
//!
//! ```rust,no_run
//! use vgi_volume::decode_volume;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let volume = decode_volume("/data/grain/grain.vgi")?;
//! println!("{} x {} x {}", volume.width(), volume.height(), volume.depth());
//!
//! let middle = volume.slice(volume.middle_slice_index());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod decoder;
pub mod error;
pub mod io;
pub mod layout;
pub mod metadata;
pub mod parser;
pub mod types;
pub mod utils;
pub mod volume;

// Re-exports
pub use config::DecodeOptions;
pub use decoder::{decode_volume, decode_volume_async, DecodedVolume, VgiDecoder};
pub use error::{ErrorKind, Result, VgiError};
pub use io::{load_raw, read_volume, RawVolumeReader};
pub use layout::VolumeLayout;
pub use metadata::VolumeDescriptor;
pub use parser::{
    parse_metadata, parse_metadata_file, parse_metadata_str, MetadataParser, ParseWarning,
    ParsedMetadata, WarningKind,
};
pub use types::{ByteOrder, ValueRange};
pub use volume::Volume;

/// Version of the decoder
pub const VGI_VOLUME_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VGI_VOLUME_VERSION.is_empty());
    }
}
