// ===== circlet/benches/scoring_bench.rs =====
use circlet::config::RoundWeights;
use circlet::geometry::Point;
use circlet::round::{finalize, AttemptScore};
use circlet::scorer::Scorer;
use circlet::synth;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = Scorer::default();
    let mut rng = fastrand::Rng::with_seed(42);

    let center = Point::new(150.0, 150.0);
    let typical = synth::jittered_circle(&mut rng, center, 50.0, 360, 3.0);
    let dense = synth::jittered_circle(&mut rng, center, 50.0, 10_000, 3.0);

    c.bench_function("score (360 points)", |b| {
        b.iter(|| scorer.score(black_box(&typical)))
    });

    c.bench_function("score (10k points)", |b| {
        b.iter(|| scorer.score(black_box(&dense)))
    });

    let attempts = vec![
        AttemptScore::new(1, 78),
        AttemptScore::new(2, 91),
        AttemptScore::new(3, 85),
    ];
    let weights = RoundWeights::default();

    c.bench_function("finalize (3 attempts)", |b| {
        b.iter(|| finalize(black_box(&attempts), black_box(&weights)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
