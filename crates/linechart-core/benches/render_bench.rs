use linechart_core::{render, CanvasSize, ChartStyle, Point};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            let y = (i as f64 * 0.01).sin() * 10.0 + 12.0;
            Point::new(x, y)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let style = ChartStyle::default();
    let size = CanvasSize::new(800.0, 500.0);
    let mut group = c.benchmark_group("render_commands");
    for &n in &[11usize, 10_000usize, 50_000usize] {
        group.bench_function(format!("points_{n}"), |b| {
            let points = build_points(n);
            b.iter(|| {
                let cmds = render(black_box(&points), size, &style);
                black_box(cmds);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
