use std::{fmt::Write as _, hint::black_box};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use csvgrid_core::{GridOptions, GridState, SortDirection, Table, ViewCache, derive_view, ingest};

const STATES: &[&str] = &["NY", "CA", "TX", "MA", "IL", "CO", "FL", "WA"];

fn generate_csv(rows: usize) -> String {
    let mut out = String::from("city,state,pop\n");
    for i in 0..rows {
        let state = STATES[i % STATES.len()];
        writeln!(out, "city{i},{state},{}", i % 977).expect("write to string");
    }
    out
}

fn generate_table(rows: usize) -> Table {
    ingest::from_reader(generate_csv(rows).as_bytes()).expect("failed to parse generated CSV")
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");
    for &rows in &[1_000, 10_000, 50_000] {
        let csv = generate_csv(rows);
        group.bench_with_input(BenchmarkId::new("from_reader", rows), &csv, |b, csv| {
            b.iter(|| {
                let table = ingest::from_reader(black_box(csv.as_bytes()))
                    .expect("failed to parse generated CSV");
                black_box(table)
            })
        });
    }
    group.finish();
}

fn bench_derive_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_view");

    for &rows in &[1_000, 10_000, 50_000] {
        let table = generate_table(rows);
        let opts = GridOptions::default();

        let unconstrained = GridState::new();

        let mut filtered_sorted = GridState::new();
        filtered_sorted.set_filter("state", vec!["CA".to_string(), "TX".to_string()]);
        filtered_sorted.set_search("1");
        filtered_sorted.set_sort(Some("pop".to_string()), SortDirection::Descending);

        group.bench_with_input(
            BenchmarkId::new("unconstrained", rows),
            &table,
            |b, table| {
                b.iter(|| black_box(derive_view(black_box(table), &unconstrained, &opts)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("filter_search_sort", rows),
            &table,
            |b, table| {
                b.iter(|| black_box(derive_view(black_box(table), &filtered_sorted, &opts)))
            },
        );
    }

    group.finish();
}

fn bench_cached_rerender(c: &mut Criterion) {
    let table = generate_table(10_000);
    let opts = GridOptions::default();
    let state = GridState::new();

    c.bench_function("cached_rerender", |b| {
        let mut cache = ViewCache::new();
        let _ = cache.derive(&table, &state, &opts);
        b.iter(|| black_box(cache.derive(black_box(&table), &state, &opts)))
    });
}

criterion_group!(benches, bench_ingest, bench_derive_view, bench_cached_rerender);
criterion_main!(benches);
