use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inkchart_core::{line, pie, Dataset, RenderOptions, Series};

fn build_line_dataset(n: usize) -> Dataset {
    let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let ys: Vec<f64> = (0..n)
        .map(|i| (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001)
        .collect();
    Dataset::from_values(vec![xs, ys])
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_tree");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("line_{n}"), |b| {
            let data = build_line_dataset(n);
            let opts = RenderOptions::default();
            b.iter(|| black_box(line(800.0, 500.0, &data, &opts)));
        });
    }
    group.bench_function("pie_9", |b| {
        let data = Dataset::new((1..=9).map(|v| Series::scalar_value(v as f64)).collect());
        let opts = RenderOptions::default();
        b.iter(|| black_box(pie(120.0, &data, &opts)));
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
