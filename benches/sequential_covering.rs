use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linfa::prelude::*;
use linfa_rules::RuleSet;
use linfa_rules_datasets::generate;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn sequential_covering_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);

    // Controls how many observations are generated
    let training_set_sizes = &[100, 1000, 10000];

    let cardinalities = [4, 3, 5, 2, 3, 4];
    let n_classes = 3;

    // Allow enough rules to explain every combination of the first two features
    let hyperparams = RuleSet::params().max_rules(12);

    let mut group = c.benchmark_group("sequential_covering");
    group.sample_size(10);

    for n in training_set_sizes.iter() {
        let dataset = generate::categorical(*n, &cardinalities, n_classes, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(n), &dataset, |b, d| {
            b.iter(|| hyperparams.fit(d))
        });
    }

    group.finish();
}

criterion_group!(benches, sequential_covering_bench);
criterion_main!(benches);
