use std::hint::black_box;
use std::num::{NonZeroU32, NonZeroUsize};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_viewer::{
    BandedPalette, FrameGeometry, FrameRenderer, MandelbrotAlgorithm, NeverCancel, PoolDispatcher, Raster,
    ScopedThreadDispatcher, Viewport, render_frame,
};

const WIDTH: u32 = 500;
const HEIGHT: u32 = 400;

fn renderer(max_iterations: u32) -> FrameRenderer<MandelbrotAlgorithm, BandedPalette> {
    FrameRenderer::new(
        MandelbrotAlgorithm::new(max_iterations, 10.0).unwrap(),
        BandedPalette::default(),
        FrameGeometry::new(WIDTH, HEIGHT, 2.0).unwrap(),
    )
}

fn bench_dispatchers(c: &mut Criterion) {
    let renderer = renderer(500);
    let viewport = Viewport::new(-0.5, 0.0, 1.0).unwrap();
    let bands = NonZeroU32::new(40).unwrap();
    let threads = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
    let pool = PoolDispatcher::new(threads).unwrap();
    let mut raster = Raster::new(WIDTH, HEIGHT).unwrap();

    let mut group = c.benchmark_group("render_frame_500x400");
    group.sample_size(20);

    group.bench_function("pool", |b| {
        b.iter(|| {
            render_frame(&renderer, black_box(&viewport), &mut raster, bands, &pool, &NeverCancel).unwrap();
        });
    });

    group.bench_function("scoped_threads", |b| {
        b.iter(|| {
            render_frame(
                &renderer,
                black_box(&viewport),
                &mut raster,
                bands,
                &ScopedThreadDispatcher,
                &NeverCancel,
            )
            .unwrap();
        });
    });

    group.finish();
}

fn bench_band_counts(c: &mut Criterion) {
    let renderer = renderer(200);
    let viewport = Viewport::new(-0.745, 0.186, 150.0).unwrap();
    let threads = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
    let pool = PoolDispatcher::new(threads).unwrap();
    let mut raster = Raster::new(WIDTH, HEIGHT).unwrap();

    let mut group = c.benchmark_group("band_count");
    group.sample_size(20);

    for count in [1, 8, 40, 400] {
        let bands = NonZeroU32::new(count).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &bands, |b, &bands| {
            b.iter(|| {
                render_frame(&renderer, &viewport, &mut raster, bands, &pool, &NeverCancel).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dispatchers, bench_band_counts);
criterion_main!(benches);
