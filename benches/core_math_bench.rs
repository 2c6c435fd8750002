use balance_chart::api::{BalanceChart, BalanceChartConfig};
use balance_chart::core::{
    Step, ValueDomain, Viewport, compute_domain, compute_split_fraction, label_series,
    series_from_values,
};
use balance_chart::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn random_walk(len: usize) -> Vec<Step> {
    let mut balance = 1_000.0;
    let values: Vec<f64> = (0..len)
        .map(|i| {
            balance += if i % 3 == 0 { -12.5 } else { 9.0 } + (i % 7) as f64;
            balance
        })
        .collect();
    series_from_values(&values)
}

fn bench_compute_domain_10k(c: &mut Criterion) {
    let series = random_walk(10_000);
    c.bench_function("compute_domain_10k", |b| {
        b.iter(|| compute_domain(black_box(&series), black_box(1_000.0)).expect("domain"))
    });
}

fn bench_split_fraction(c: &mut Criterion) {
    let domain = ValueDomain::new(87.0, 153.0);
    c.bench_function("split_fraction", |b| {
        b.iter(|| compute_split_fraction(black_box(domain), black_box(100.0)))
    });
}

fn bench_label_series_10k(c: &mut Criterion) {
    let series = random_walk(10_000);
    c.bench_function("label_series_10k", |b| {
        b.iter(|| label_series(black_box(&series), black_box(1_000.0)))
    });
}

fn bench_build_frame_2k(c: &mut Criterion) {
    let series = random_walk(2_000);
    let chart = BalanceChart::new(
        NullRenderer::default(),
        BalanceChartConfig::new(Viewport::new(1600, 900)),
    )
    .expect("chart init");

    c.bench_function("build_frame_2k", |b| {
        b.iter(|| {
            chart
                .build_frame(black_box(&series), black_box(1_000.0))
                .expect("frame")
        })
    });
}

criterion_group!(
    benches,
    bench_compute_domain_10k,
    bench_split_fraction,
    bench_label_series_10k,
    bench_build_frame_2k
);
criterion_main!(benches);
