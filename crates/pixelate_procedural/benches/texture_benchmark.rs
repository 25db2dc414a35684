//! Benchmark for noise sampling and texture generation.
//!
//! Run with: cargo bench --package pixelate_procedural --bench texture_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pixelate_procedural::{PlanetTexture, SimplexNoise, TextureSeed};

fn benchmark_noise(c: &mut Criterion) {
    let noise = SimplexNoise::new(TextureSeed::new(42));

    c.bench_function("single_noise_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.sample(black_box(x), black_box(x * 0.7)))
        });
    });

    c.bench_function("wrapped_noise_5_octaves", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.01;
            black_box(noise.octaved_wrapped(black_box(x), black_box(x * 0.7), 6.0, 5, 0.5, 2.0))
        });
    });
}

fn benchmark_planet_texture(c: &mut Criterion) {
    let planet = PlanetTexture::new(TextureSeed::new(42));

    let mut group = c.benchmark_group("planet_texture");
    group.sample_size(10);
    group.bench_function("512x256", |b| {
        b.iter(|| black_box(planet.generate(512, 256)));
    });
    group.finish();
}

criterion_group!(benches, benchmark_noise, benchmark_planet_texture);
criterion_main!(benches);
