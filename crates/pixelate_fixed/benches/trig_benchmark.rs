//! Benchmark for lookup-table trigonometry.
//!
//! Run with: cargo bench --package pixelate_fixed --bench trig_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pixelate_fixed::{Fixed, FixedMatrix, FixedVec3};

fn benchmark_sin_cos(c: &mut Criterion) {
    let mut group = c.benchmark_group("sin_cos");
    group.throughput(Throughput::Elements(256));

    group.bench_function("fixed_table", |b| {
        b.iter(|| {
            for units in 0..256 {
                let angle = Fixed::from_int(units);
                black_box(black_box(angle).sin() + black_box(angle).cos());
            }
        });
    });

    group.bench_function("f64_libm", |b| {
        b.iter(|| {
            for units in 0..256 {
                let radians = f64::from(units) * std::f64::consts::PI / 128.0;
                black_box(black_box(radians).sin() + black_box(radians).cos());
            }
        });
    });

    group.finish();
}

fn benchmark_inverse(c: &mut Criterion) {
    c.bench_function("asin_atan2", |b| {
        let mut raw = -0x1_0000;
        b.iter(|| {
            raw = if raw >= 0x1_0000 { -0x1_0000 } else { raw + 97 };
            let x = Fixed::from_raw(raw);
            black_box(black_box(x).asin() + black_box(x).atan2(Fixed::HALF))
        });
    });
}

fn benchmark_matrix_apply(c: &mut Criterion) {
    let m = FixedMatrix::planet_rotation(
        Fixed::from_int(40),
        Fixed::from_int(16),
        Fixed::from_int(8),
    );
    let p = FixedVec3::from_ints(12, -30, 41);

    c.bench_function("matrix_apply", |b| {
        b.iter(|| black_box(m.apply(black_box(p))));
    });
}

criterion_group!(benches, benchmark_sin_cos, benchmark_inverse, benchmark_matrix_apply);
criterion_main!(benches);
