//! Criterion benchmarks for outline construction and plane tiling.
//! Focus sizes: square planes with side in {10, 50, 100, 200}.
//! Results: by default under target/criterion; run with
//!   cargo bench -p polytile

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polytile::api::{build_outline, tile, to_closed_fan, Point, TileCfg};

fn bench_outline(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline");
    for &step in &[60.0f64, 30.0, 10.0, 1.0] {
        group.bench_with_input(BenchmarkId::new("build_and_fan", step), &step, |b, &step| {
            b.iter(|| {
                let center = Point::new(3.0, 4.0);
                let v = build_outline(center, Point::new(1.5, 1.0), step);
                to_closed_fan(center, &v)
            })
        });
    }
    group.finish();
}

fn bench_tile(c: &mut Criterion) {
    let mut group = c.benchmark_group("tile");
    for &side in &[10.0f64, 50.0, 100.0, 200.0] {
        let cfg = TileCfg::new(side, side, Point::new(1.0, 1.0), 60.0);
        group.bench_with_input(
            BenchmarkId::new("hex_unit", cfg.polygon_count()),
            &cfg,
            |b, cfg| b.iter(|| tile(cfg.width, cfg.height, cfg.radii, cfg.angle_step)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_outline, bench_tile);
criterion_main!(benches);
