//! Benchmarks for puzzle generation.
//!
//! Measures the full two-phase pipeline (seed, solve, carve) with fixed
//! seeds so runs are reproducible while still covering several cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::hint;

use cellwise_generator::PuzzleGenerator;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;

const SEEDS: [u64; 3] = [42, 0x5eed, 0x0123_4567_89ab_cdef];

fn bench_generate(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();
    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate_45_blanks", format!("seed_{seed:#x}")),
            &seed,
            |b, &seed| {
                b.iter(|| {
                    let mut rng = Pcg64Mcg::seed_from_u64(hint::black_box(seed));
                    generator.generate(45, &mut rng)
                });
            },
        );
    }
}

fn bench_generate_solved(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();
    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate_solved", format!("seed_{seed:#x}")),
            &seed,
            |b, &seed| {
                b.iter(|| {
                    let mut rng = Pcg64Mcg::seed_from_u64(hint::black_box(seed));
                    generator.generate_solved(&mut rng)
                });
            },
        );
    }
}

criterion_group!(benches, bench_generate, bench_generate_solved);
criterion_main!(benches);
