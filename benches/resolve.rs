//! Level resolution benchmarks
//!
//! Resolution runs on every habit completion and screen focus, so it should
//! stay well under a microsecond across the whole XP range.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use habit_progress::{calculate_user_level, check_level_up, LevelCurve, LevelTable};

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for xp in [0u64, 450, 12_000, 5_000_000, 250_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(xp), &xp, |b, &xp| {
            b.iter(|| calculate_user_level(black_box(xp)))
        });
    }

    group.finish();
}

fn bench_long_table(c: &mut Criterion) {
    let curve = LevelCurve { growth_factor: 1.02, max_level: 1000, ..LevelCurve::default() };
    let table = LevelTable::from_curve(&curve).expect("valid curve");
    let top = table.max().xp_required;

    c.bench_function("resolve_1000_levels", |b| {
        b.iter(|| table.resolve(black_box(top / 2)))
    });
}

fn bench_check_level_up(c: &mut Criterion) {
    c.bench_function("check_level_up", |b| {
        b.iter(|| check_level_up(black_box(9_990), black_box(10_010)))
    });
}

criterion_group!(benches, bench_resolve, bench_long_table, bench_check_level_up);
criterion_main!(benches);
