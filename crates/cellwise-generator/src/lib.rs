//! Puzzle generation on top of the backtracking solver.
//!
//! Generation is two-phase:
//!
//! 1. **Seeding**: an all-blank grid receives a small number of random,
//!    individually legal clues, and the solver completes it. Unsolvable
//!    seedings are discarded and retried (a bounded number of times, with
//!    a canonical solved grid as the final fallback).
//! 2. **Carving**: clues are removed one at a time from the solved grid,
//!    re-proving after each removal that exactly one solution remains.
//!    Removals that break uniqueness are restored and a different cell is
//!    tried; a deadline bounds the whole carve.
//!
//! Every operation takes the random source explicitly, so generation is
//! reproducible under a fixed seed and safe to run concurrently.
//!
//! # Examples
//!
//! ```
//! use cellwise_generator::PuzzleGenerator;
//! use cellwise_solver::{Deadline, solve};
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64Mcg;
//!
//! let generator = PuzzleGenerator::new();
//! let mut rng = Pcg64Mcg::seed_from_u64(42);
//!
//! let puzzle = generator.generate(45, &mut rng);
//! assert!(puzzle.solution.is_full());
//!
//! let solutions = solve(&puzzle.problem, Deadline::NONE)?;
//! assert_eq!(solutions.unique(), Some(&puzzle.solution));
//! # Ok::<(), cellwise_solver::SolveError>(())
//! ```

mod generator;

pub use self::generator::{CarvedPuzzle, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator};
