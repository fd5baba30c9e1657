use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlbind::prelude::*;

/// SELECT * FROM t WHERE col0 = ? AND col1 = ? ... with every other filter absent.
fn build_filters(n: usize) -> (String, usize) {
    let mut q = presets::default();
    let filters: Vec<Fragment> = (0..n)
        .map(|i| {
            let value = if i % 2 == 0 { Some(i as i64) } else { None };
            q.eq(format!("col{i}"), not_none(value))
        })
        .collect();
    let sql = format!("SELECT * FROM t {}", where_(filters));
    (sql, q.len())
}

fn bench_conditional_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("fragment_builder/conditional_filters");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_filters(n)));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("fragment_builder/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::new("generic", n), &values, |b, values| {
            b.iter(|| {
                let mut q = presets::default();
                black_box(q.in_("id", values.clone()))
            });
        });
        group.bench_with_input(BenchmarkId::new("sqlite", n), &values, |b, values| {
            b.iter(|| {
                let mut q = presets::sqlite();
                black_box(q.in_("id", values.clone()))
            });
        });
    }

    group.finish();
}

fn bench_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("fragment_builder/values");

    for rows in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| {
                let mut q = presets::postgres();
                let data: Vec<_> = (0..rows)
                    .map(|i| pairs!["id" => i as i64, "name" => "row", "score" => 0.5])
                    .collect();
                black_box(q.values(data))
            });
        });
    }

    group.finish();
}

fn bench_named_style(c: &mut Criterion) {
    c.bench_function("fragment_builder/named_update", |b| {
        b.iter(|| {
            let mut q = presets::default_named();
            let sql = format!(
                "UPDATE t {} {}",
                q.set(pairs!["a" => 1i64, "b" => "x", "c" => None::<i64>]),
                q.where_eq(pairs!["id" => 42i64]),
            );
            black_box((sql, q.finish()))
        });
    });
}

criterion_group!(
    benches,
    bench_conditional_filters,
    bench_in_list,
    bench_values,
    bench_named_style
);
criterion_main!(benches);
