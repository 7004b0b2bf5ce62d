//! Benchmarks for the backtracking solver.
//!
//! Measures `solve` on three fixed grids:
//!
//! - **`classic`**: the classic published 30-clue puzzle (unique solution)
//! - **`sparse`**: the same puzzle with one band of clues removed
//!   (ambiguous, stops at the two-solution cap)
//! - **`empty`**: the all-blank grid (first two solutions)
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use cellwise_core::{DigitGrid, Position};
use cellwise_solver::{Deadline, solve};
use criterion::{Criterion, criterion_group, criterion_main};

fn classic_puzzle() -> DigitGrid {
    DigitGrid::from_values([
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9],
    ])
}

fn sparse_puzzle() -> DigitGrid {
    let mut grid = classic_puzzle();
    for y in 0..3 {
        for x in 0..9 {
            grid.clear(Position::new(x, y));
        }
    }
    grid
}

fn bench_solve(c: &mut Criterion) {
    let cases = [
        ("classic", classic_puzzle()),
        ("sparse", sparse_puzzle()),
        ("empty", DigitGrid::new()),
    ];
    for (name, grid) in cases {
        c.bench_function(&format!("solve_{name}"), |b| {
            b.iter(|| solve(hint::black_box(&grid), Deadline::NONE));
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
