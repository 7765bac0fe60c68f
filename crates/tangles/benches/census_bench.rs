//! Criterion benches for the enumeration pipeline.
//!
//! - `enumerate`: bare Redelmeier growth (counting only) for sizes 6–9.
//! - `census`: full enumerate + classify + reduce for sizes 6–8.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tangles::enumerate::count_polysticks;
use tangles::{census, CensusCfg};

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    for &p in &[6usize, 7, 8, 9] {
        group.bench_with_input(BenchmarkId::new("count_polysticks", p), &p, |b, &p| {
            b.iter(|| count_polysticks(p))
        });
    }
    group.finish();
}

fn bench_census(c: &mut Criterion) {
    let mut group = c.benchmark_group("census");
    group.sample_size(10);
    for &p in &[6usize, 7, 8] {
        group.bench_with_input(BenchmarkId::new("census", p), &p, |b, &p| {
            b.iter(|| {
                census(CensusCfg {
                    max_size: p,
                    ..CensusCfg::default()
                })
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enumerate, bench_census);
criterion_main!(benches);
