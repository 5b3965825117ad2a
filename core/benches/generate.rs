use criterion::{Criterion, criterion_group, criterion_main};
use memorito_core::{
    ChallengeGenerator, GameConfig, RandomChallengeGenerator, cell_sequence,
    sample_without_replacement,
};
use rand::prelude::*;

fn bench_generate(c: &mut Criterion) {
    let config = GameConfig::new(16, 64, 3, 10, 3);
    c.bench_function("generate_16x16_64", |b| {
        let mut generator = RandomChallengeGenerator::new(42);
        b.iter(|| generator.generate(config));
    });
}

fn bench_sample(c: &mut Criterion) {
    let cells = cell_sequence(GameConfig::new(16, 64, 3, 10, 3).total_cells());
    c.bench_function("sample_64_of_256", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| sample_without_replacement(&mut rng, &cells, 64));
    });
}

criterion_group!(benches, bench_generate, bench_sample);
criterion_main!(benches);
