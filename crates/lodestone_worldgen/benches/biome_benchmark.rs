//! Biome query throughput.
//!
//! The region scanner issues one viability query per in-radius candidate;
//! the seed scanner issues one biome query per candidate seed. Both are
//! dominated by climate sampling, benchmarked here.

use criterion::{criterion_group, criterion_main, Criterion};
use lodestone_shared::{Dimension, McVersion, Seed, SEA_LEVEL};
use lodestone_worldgen::{Generator, Scale};

fn bench_biome_queries(c: &mut Criterion) {
    let mut generator = Generator::new(McVersion::V1_18);
    generator.apply_seed(Dimension::Overworld, Seed::new(42));

    c.bench_function("biome_at_block_scale", |b| {
        let mut x = 0;
        b.iter(|| {
            x += 97;
            generator
                .biome_at(Scale::Block, x, SEA_LEVEL, -x)
                .expect("seeded")
        });
    });

    c.bench_function("biome_at_biome_scale", |b| {
        let mut x = 0;
        b.iter(|| {
            x += 31;
            generator
                .biome_at(Scale::Biome, x, SEA_LEVEL / 4, -x)
                .expect("seeded")
        });
    });

    c.bench_function("apply_seed", |b| {
        let mut seed = 0_u64;
        b.iter(|| {
            seed += 1;
            generator.apply_seed(Dimension::Overworld, Seed::new(seed));
        });
    });
}

criterion_group!(benches, bench_biome_queries);
criterion_main!(benches);
