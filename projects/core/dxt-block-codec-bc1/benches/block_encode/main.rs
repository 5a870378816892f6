use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxt_block_codec_bc1::{encode_texels_with_settings, Bc1EncodeSettings};
use dxt_block_codec_common::color_8888::Color8888;
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

/// Builds `count` blocks of texels with a simple varying pattern.
/// Real-world data would have more variety, but this is suitable for benchmarking.
fn make_blocks(count: usize) -> Vec<[Color8888; 16]> {
    (0..count)
        .map(|block| {
            core::array::from_fn(|texel| {
                let value = block * 16 + texel;
                Color8888::opaque(
                    (value % 251) as u8,
                    (value * 7 % 253) as u8,
                    (value * 13 % 255) as u8,
                )
            })
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC1 Encode Blocks");

    let blocks_count = 16384;
    let blocks = make_blocks(blocks_count);
    let mut output = vec![[0u8; 8]; blocks_count];

    group.throughput(Throughput::Bytes((blocks_count * 16 * 4) as u64));

    for settings in Bc1EncodeSettings::all_combinations() {
        group.bench_with_input(
            BenchmarkId::new("encode_blocks", format!("{:?}", settings.endpoint_fit)),
            &settings,
            |b, settings| {
                b.iter(|| {
                    for (texels, packed) in blocks.iter().zip(output.iter_mut()) {
                        *packed = encode_texels_with_settings(black_box(texels), *settings);
                    }
                })
            },
        );
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
