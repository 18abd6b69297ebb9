use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use aanya_core::{FixedClock, ItemId};
use aanya_inventory::{
    CategoryFilter, FilterState, Inventory, Item, ItemDraft, ItemStore, Size, SizeStock,
    StockFilter, StockLevel, StockSummary, export_csv, filter_items,
};
use chrono::NaiveDate;

const CATEGORIES: [&str; 4] = ["Coord Sets", "Cotton Wear", "Festive Wear", "Western Wear"];
const COLORS: [&str; 5] = ["Pink", "Blue", "Red", "White", "Black"];

fn bench_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

/// Deterministic store of `n` items with a spread of stock levels.
fn build_store(n: usize) -> ItemStore {
    let items = (0..n)
        .map(|i| {
            let quantities = [
                (i % 13) as u32,
                (i % 7) as u32,
                (i % 23) as u32,
                (i % 3) as u32,
                (i % 17) as u32,
            ];
            Item::from_parts(
                ItemId::new(i as u64 + 1),
                format!("Item {i}"),
                CATEGORIES[i % CATEGORIES.len()],
                (i as u64 % 50) * 100,
                COLORS[i % COLORS.len()],
                SizeStock::from_quantities(quantities),
                bench_date(),
            )
        })
        .collect();
    ItemStore::from_items(items).unwrap()
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");

    for size in [100usize, 1_000, 10_000] {
        let store = build_store(size);
        group.throughput(Throughput::Elements(size as u64));

        let pass_through = FilterState::default();
        group.bench_with_input(BenchmarkId::new("pass_through", size), &store, |b, store| {
            b.iter(|| black_box(filter_items(store, &pass_through)).len());
        });

        let combined = FilterState::new(
            CategoryFilter::from("Cotton Wear"),
            "pink",
            StockFilter::Level(StockLevel::Out),
        );
        group.bench_with_input(BenchmarkId::new("combined", size), &store, |b, store| {
            b.iter(|| black_box(filter_items(store, &combined)).len());
        });
    }

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [100usize, 1_000, 10_000] {
        let store = build_store(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(StockSummary::compute(store)));
        });
    }

    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    group.bench_function("create_then_delete", |b| {
        let mut inventory = Inventory::with_clock(build_store(1_000), FixedClock(bench_date()));
        b.iter(|| {
            let id = inventory.create(
                ItemDraft::new()
                    .name("Bench Item")
                    .category("Cotton Wear")
                    .stock(Size::M, 5),
            );
            black_box(inventory.delete(id));
        });
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let store = build_store(1_000);
    c.bench_function("export_csv_1000", |b| {
        b.iter(|| black_box(export_csv(&store, bench_date()).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_filtering,
    bench_summary,
    bench_mutations,
    bench_export
);
criterion_main!(benches);
