//! Benchmarks for leaderboard view derivation
//!
//! Run with: cargo bench

use astro_dashboard::model::{assign_indices, ListRecord};
use astro_dashboard::view::{derive_list_view, DashboardState};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn create_leaderboard(count: usize) -> Vec<ListRecord> {
    assign_indices(
        (0..count)
            .map(|i| ListRecord::new(format!("0x{:040x}", i * 7919), (count - i).to_string()))
            .collect(),
    )
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    for size in [1_000, 10_000, 100_000] {
        let list = create_leaderboard(size);
        let last_address = list[size - 1].owner_address.to_uppercase().replacen("0X", "0x", 1);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("paginate_{}", size), |b| {
            b.iter(|| derive_list_view(black_box(&list), black_box(size / 100), ""))
        });

        group.bench_function(format!("filter_{}", size), |b| {
            b.iter(|| derive_list_view(black_box(&list), 1, black_box(&last_address)))
        });
    }

    group.finish();
}

fn bench_memoized_view(c: &mut Criterion) {
    let mut state = DashboardState::new();
    state.replace_list(create_leaderboard(100_000));

    c.bench_function("current_view_cached", |b| {
        b.iter(|| black_box(state.current_view().len()))
    });
}

criterion_group!(benches, bench_derive, bench_memoized_view);
criterion_main!(benches);
