use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexlife::{Grid, Layout, LifeConfig, Point2, RegionSize};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");

    // Roughly a full-screen canvas at the default cell size
    let config = LifeConfig {
        seed: 1234u64.into(),
        width: 120,
        height: 80,
        ..Default::default()
    };
    let mut grid = Grid::from_config(&config).unwrap();
    grid.randomize(grid.region());
    group.bench_function("step", |b| {
        b.iter_batched_ref(
            || grid.clone(),
            |grid| grid.step(),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("randomize", |b| {
        b.iter(|| grid.randomize(black_box(RegionSize::new(120, 80))))
    });

    let layout = Layout::default();
    group.bench_function("to_hex", |b| {
        b.iter(|| layout.to_hex(black_box(Point2::new(123.4, -567.8))))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
