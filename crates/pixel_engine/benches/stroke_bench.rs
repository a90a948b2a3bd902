//! Benchmarks for footprint resolution and full stroke commits.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pixel_engine::{Color, Footprint, FootprintCache, PaintEngine, PaintSettings};
use std::hint::black_box;

fn checker_pattern(side: usize) -> String {
    let mut pattern = String::new();
    for y in 0..side {
        for x in 0..side {
            if x == side / 2 && y == side / 2 {
                pattern.push('o');
            } else if (x + y) % 2 == 0 {
                pattern.push('x');
            } else {
                pattern.push('.');
            }
        }
        pattern.push('\n');
    }
    pattern
}

fn bench_footprint_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("footprint_resolve");
    for side in [1usize, 3, 9, 15] {
        let pattern = checker_pattern(side);
        group.bench_with_input(BenchmarkId::new("uncached", side), &pattern, |b, pattern| {
            b.iter(|| Footprint::resolve(black_box(pattern)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("cached", side), &pattern, |b, pattern| {
            let cache = FootprintCache::new();
            b.iter(|| cache.resolve(black_box(pattern)).unwrap());
        });
    }
    group.finish();
}

fn bench_stroke_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_commit");
    let background = Color::new(0xF9, 0xFF, 0xFE);

    for side in [32i32, 64, 128] {
        let settings = PaintSettings::new(Color::new(0xD0, 0x2E, 0x26), checker_pattern(5), 0.5);
        group.bench_with_input(BenchmarkId::new("diagonal_drag", side), &side, |b, &side| {
            b.iter(|| {
                let mut engine = PaintEngine::new(side, background);
                engine.begin_stroke((0, 0), &settings).unwrap();
                for i in 1..side {
                    engine.move_stroke((i, i), &settings).unwrap();
                }
                black_box(engine.end_stroke().unwrap())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_footprint_resolution, bench_stroke_commit);
criterion_main!(benches);
