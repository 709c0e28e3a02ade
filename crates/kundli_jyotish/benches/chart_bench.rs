use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundli_jyotish::{ChartConfig, compute_chart, compute_chart_with_config, interpret};
use kundli_time::BirthMoment;
use kundli_vedic_base::{GeoLocation, NodeMode};

fn chart_bench(c: &mut Criterion) {
    let moment = BirthMoment::new(1990, 1, 15, 10, 30).unwrap();
    let delhi = GeoLocation::new(28.6139, 77.2090);
    let true_node = ChartConfig {
        node_mode: NodeMode::True,
        ..ChartConfig::default()
    };

    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(moment), black_box(delhi)))
    });
    group.bench_function("compute_chart_true_node", |b| {
        b.iter(|| compute_chart_with_config(black_box(moment), black_box(delhi), &true_node))
    });
    group.finish();
}

fn interpret_bench(c: &mut Criterion) {
    let moment = BirthMoment::new(1990, 1, 15, 10, 30).unwrap();
    let chart = compute_chart(moment, GeoLocation::new(28.6139, 77.2090)).unwrap();
    c.bench_function("interpret", |b| b.iter(|| interpret(black_box(&chart))));
}

criterion_group!(benches, chart_bench, interpret_bench);
criterion_main!(benches);
