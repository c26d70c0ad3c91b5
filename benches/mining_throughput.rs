/// Mining throughput benchmarks
///
/// Measures seed construction and full pattern growth on synthetic inputs.
/// Random inputs stay cheap; cyclic inputs are the repetitive worst case
/// where every seed grows into long patterns.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gapmine::input::{cyclic_sequence, random_sequence};
use gapmine::mining::{mine, Criterion as MiningCriterion, SeedIndex};
use gapmine::select::rank;
use std::time::Duration;

fn criterion_for(max_error: usize) -> MiningCriterion {
    MiningCriterion {
        min_len: 2,
        min_support: 3,
        max_error,
        min_score: 0.0,
    }
}

fn bench_seed_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed_index");
    group.measurement_time(Duration::from_secs(5));

    for size in [1_000usize, 10_000].iter() {
        let sequence = random_sequence(*size, 16, 7).expect("non-zero alphabet");
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sequence, |b, sequence| {
            b.iter(|| SeedIndex::build(black_box(sequence), &criterion_for(2), 256));
        });
    }

    group.finish();
}

fn bench_mine_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("mine_random");
    group.measurement_time(Duration::from_secs(5));

    let sequence = random_sequence(500, 8, 42).expect("non-zero alphabet");
    group.throughput(Throughput::Elements(sequence.len() as u64));

    for max_error in [0usize, 1, 2].iter() {
        group.bench_with_input(
            BenchmarkId::new("max_error", max_error),
            max_error,
            |b, &max_error| {
                b.iter(|| mine(black_box(&sequence), &criterion_for(max_error)));
            },
        );
    }

    group.finish();
}

fn bench_mine_cyclic(c: &mut Criterion) {
    let mut group = c.benchmark_group("mine_cyclic");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    let sequence = cyclic_sequence(64, 16).expect("non-zero alphabet");
    let criterion = MiningCriterion {
        min_support: 2,
        max_error: 1,
        ..criterion_for(1)
    };

    group.bench_function("mine_and_rank", |b| {
        b.iter(|| {
            let patterns = mine(black_box(&sequence), &criterion).expect("valid input");
            rank(patterns, sequence.len(), &criterion)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_seed_index, bench_mine_random, bench_mine_cyclic);
criterion_main!(benches);
