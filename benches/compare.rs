// benches/compare.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::NaiveDate;

use dura_track::compare::{align, compute};
use dura_track::Snapshot;

/// Synthetic highscore table roughly the size of a full 200-page scrape.
fn synth_snapshot(day: u32, players: usize, bump: u64) -> Snapshot {
    let date = NaiveDate::from_ymd_opt(2025, 10, day).unwrap();
    let rows = (0..players)
        .map(|i| {
            // Deterministic spread with plenty of rank ties.
            let exp = 1_000_000 - (i as u64 / 3) * 1_000 + bump * ((i % 7) as u64);
            (format!("Player {i}"), exp)
        })
        .collect();
    Snapshot::new(date, rows)
}

fn bench_compare(c: &mut Criterion) {
    let older = synth_snapshot(2, 10_000, 0);
    let newer = synth_snapshot(3, 10_000, 17);

    c.bench_function("align_10k", |b| {
        b.iter(|| {
            let pairs = align(black_box(&older), black_box(&newer));
            black_box(pairs.len())
        })
    });

    c.bench_function("ranks_10k", |b| {
        b.iter(|| black_box(&newer).ranks())
    });

    let aligned = align(&older, &newer);
    c.bench_function("compute_10k", |b| {
        b.iter(|| {
            let deltas = compute(black_box(&aligned), black_box(&older), black_box(&newer));
            black_box(deltas.len())
        })
    });
}

criterion_group!(benches, bench_compare);
criterion_main!(benches);
