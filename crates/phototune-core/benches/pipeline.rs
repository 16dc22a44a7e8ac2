//! Pipeline throughput over synthetic test-card images.
//!
//! Run with: cargo bench -p phototune-core

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use phototune_core::{FilterParams, Pipeline, PixelBuf};

fn all_sliders() -> FilterParams {
    FilterParams {
        brightness: 40.0,
        contrast: 60.0,
        saturation: 80.0,
        gamma: 2.2,
    }
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let pipeline = Pipeline::new();
    let params = all_sliders();

    for size in [256u32, 512, 1024] {
        let image = PixelBuf::test_card(size, size);
        group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &image, |b, image| {
            b.iter(|| pipeline.process(black_box(image), black_box(&params)).unwrap());
        });
    }
    group.finish();
}

fn bench_single_sliders(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_slider");
    let pipeline = Pipeline::new();
    let image = PixelBuf::test_card(512, 512);
    group.throughput(Throughput::Elements(512 * 512));

    let cases = [
        (
            "brightness",
            FilterParams {
                brightness: 40.0,
                ..Default::default()
            },
        ),
        (
            "contrast",
            FilterParams {
                contrast: 60.0,
                ..Default::default()
            },
        ),
        (
            "saturation",
            FilterParams {
                saturation: 80.0,
                ..Default::default()
            },
        ),
        (
            "gamma",
            FilterParams {
                gamma: 2.2,
                ..Default::default()
            },
        ),
    ];

    for (name, params) in cases {
        group.bench_function(name, |b| {
            b.iter(|| pipeline.process(black_box(&image), black_box(&params)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_pipeline, bench_single_sliders);
criterion_main!(benches);
