use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;
use vgi_volume::utils::{decode_u16_samples, encode_u16_samples};
use vgi_volume::{read_volume, ByteOrder, VolumeLayout};

fn bench_sample_conversion(c: &mut Criterion) {
    let samples: Vec<u16> = (0..512 * 512).map(|i| (i % 65536) as u16).collect();
    let bytes = encode_u16_samples(&samples, ByteOrder::LittleEndian);
    let mut out = vec![0u16; samples.len()];

    let mut group = c.benchmark_group("slice_conversion");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        group.bench_function(order.to_string(), |b| {
            b.iter(|| decode_u16_samples(black_box(&bytes), order, &mut out))
        });
    }
    group.finish();
}

fn bench_read_volume(c: &mut Criterion) {
    let layout = VolumeLayout::new(256, 256, 64).unwrap();
    let samples: Vec<u16> = (0..layout.total_voxels()).map(|i| (i % 4096) as u16).collect();
    let bytes = encode_u16_samples(&samples, ByteOrder::LittleEndian);

    let mut group = c.benchmark_group("read_volume");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("256x256x64", |b| {
        b.iter(|| read_volume(Cursor::new(black_box(&bytes)), layout, ByteOrder::LittleEndian))
    });
    group.finish();
}

criterion_group!(benches, bench_sample_conversion, bench_read_volume);
criterion_main!(benches);
