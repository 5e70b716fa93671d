use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lm_core::Position;
use lm_route::order_nearest;

fn spiral_breadcrumbs(n: usize) -> Vec<Position> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 * 0.35;
        let r = 4.0 + t * 3.0;
        let x = 512.0 + r * t.cos();
        let y = 512.0 + r * t.sin();
        out.push(Position::new(x.round() as usize, y.round() as usize));
    }
    // Scan order, as produced by the marker search.
    out.sort();
    out
}

fn bench_order(c: &mut Criterion) {
    let crumbs = spiral_breadcrumbs(400);
    let start = Position::new(512, 512);

    c.bench_function("lm_route_order_nearest_400", |b| {
        b.iter(|| {
            let route = order_nearest(black_box(start), black_box(&crumbs));
            black_box(route.len());
        });
    });
}

criterion_group!(benches, bench_order);
criterion_main!(benches);
