//! Example: decode a VGI volume and probe a few voxels
//!
//! Run with: cargo run --example decode_vgi -- path/to/volume.vgi [options.json]

use anyhow::{bail, Context};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vgi_volume::{DecodeOptions, VgiDecoder};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args_os().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        bail!("usage: decode_vgi <volume.vgi> [options.json]");
    };

    let options = match args.next() {
        Some(config) => DecodeOptions::from_json_file(config.as_ref())
            .with_context(|| format!("loading options from {:?}", config))?,
        None => DecodeOptions::default(),
    };

    let decoded = VgiDecoder::new(options)
        .decode_with_report(&path)
        .with_context(|| format!("decoding {}", path.display()))?;
    let volume = &decoded.volume;

    println!("{}", volume.layout().summary());
    println!("Raw data: {}", decoded.data_path.display());
    for warning in &decoded.warnings {
        println!("  skipped {}", warning);
    }

    if let Some(range) = volume.value_range() {
        println!("Value range: {} - {}", range.min, range.max);
    }

    let z = volume.middle_slice_index();
    let probes = [
        (0, 0, 0),
        (volume.width() / 2, volume.height() / 2, z),
        (volume.width() - 1, volume.height() - 1, volume.depth() - 1),
    ];
    for (x, y, z) in probes {
        if let Some(value) = volume.get(x, y, z) {
            println!("value at ({}, {}, {}): {}", x, y, z, value);
        }
    }

    Ok(())
}
