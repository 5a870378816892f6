use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use dxt_block_codec_bc1::decode_packed;
use dxt_block_codec_common::decoded_4x4_block::Decoded4x4Block;
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC1 Decode Blocks");

    // Set up the test data - 1MB of BC1 blocks
    let bc1_size = 1048576;
    let blocks_count = bc1_size / 8;

    // This creates simple BC1 blocks with varying colors
    let input: Vec<[u8; 8]> = (0..blocks_count)
        .map(|block| core::array::from_fn(|byte| ((block * 8 + byte) % 255) as u8))
        .collect();
    let mut output = vec![Decoded4x4Block::new(Default::default()); blocks_count];

    group.throughput(Throughput::Bytes(bc1_size as u64));

    group.bench_function("decode_blocks", |b| {
        b.iter(|| {
            for (packed, decoded) in input.iter().zip(output.iter_mut()) {
                *decoded = decode_packed(black_box(packed));
            }
        })
    });

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
