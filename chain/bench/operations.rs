use std::time::Duration;

use chain::clock::FixedClock;
use chain::types::{Chain, ChainBuilder};

use lib::DEFAULT_SCENARIOS;
use lib::utils::hash::{self, HashAlgorithm};

use chrono::NaiveDateTime;
use criterion::{BatchSize, BenchmarkGroup, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn fixed_builder(algorithm: HashAlgorithm) -> ChainBuilder<StdRng, FixedClock> {
    let epoch: FixedClock = FixedClock(NaiveDateTime::default());
    return ChainBuilder::with_parts(StdRng::seed_from_u64(0), epoch, algorithm);
}

fn bench_digest(c: &mut Criterion) {
    let mut group: BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("Digest");

    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));
    for algorithm in [HashAlgorithm::Sha256, HashAlgorithm::Blake3] {
        // Roughly the text hashed for a node with a 200 value body.
        let data: Vec<u8> = vec![b'7'; 64 + 200 * 7];
        group.bench_with_input(BenchmarkId::new("digest", algorithm), &data, |b, data| {
            b.iter(|| hash::digest(algorithm, black_box(data)))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group: BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("Chain Build");

    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(3));
    for (n, k) in DEFAULT_SCENARIOS {
        let label: String = format!("n={}, k={}", n, k);
        group.bench_function(BenchmarkId::new("build", &label), |b| {
            let mut builder: ChainBuilder<StdRng, FixedClock> = fixed_builder(HashAlgorithm::Sha256);
            // Release happens outside the measured routine.
            b.iter_with_large_drop(|| builder.build(black_box(n), black_box(k)))
        });
        group.bench_function(BenchmarkId::new("build_and_release", &label), |b| {
            let mut builder: ChainBuilder<StdRng, FixedClock> = fixed_builder(HashAlgorithm::Sha256);
            b.iter(|| builder.build(black_box(n), black_box(k)).release())
        });
    }
    group.finish();
}

fn bench_release(c: &mut Criterion) {
    let mut group: BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("Chain Release");

    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));
    for n in [200usize, 10_000] {
        group.bench_with_input(BenchmarkId::new("release", n), &n, |b, &n| {
            let mut builder: ChainBuilder<StdRng, FixedClock> = fixed_builder(HashAlgorithm::Blake3);
            b.iter_batched(|| builder.build(n, 10), Chain::release, BatchSize::LargeInput)
        });
    }
    group.finish();
}

criterion_group!(benches, bench_digest, bench_build, bench_release);
criterion_main!(benches);
