// Benchmark for availability index construction
// Measures parsing and indexing of shipping option lists of increasing size

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use delivery_date_picker::models::shipping_option::ShippingOption;
use delivery_date_picker::services::delivery::{parse_delivery_date, AvailabilityIndex};

fn generate_options(count: usize) -> Vec<ShippingOption> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            let description = date.format("%A %-d %B, %Y").to_string();
            ShippingOption::new(format!("opt-{i}"), description, i as f64 * 0.5)
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_delivery_date", |b| {
        b.iter(|| parse_delivery_date(black_box("Wednesday 25 December, 2024")))
    });
}

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("availability_index_build");

    for count in [10, 100, 1000].iter() {
        let options = generate_options(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &options, |b, options| {
            b.iter(|| AvailabilityIndex::build(black_box(options)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_build_index);
criterion_main!(benches);
