//! The two-phase puzzle generator.

use std::{ops::RangeInclusive, time::Duration};

use cellwise_core::{Digit, DigitGrid, Position};
use cellwise_solver::{Deadline, cell_ok, solve};
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

/// Tuning knobs for puzzle generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// How many random clues to seed before solving (picked uniformly
    /// from this range per attempt).
    pub seed_clues: RangeInclusive<u8>,
    /// How many seeding attempts before falling back to the built-in
    /// solved grid. The original design retried forever; the bound makes
    /// termination unconditional.
    pub max_seed_attempts: usize,
    /// Time budget for each solve of a seeded grid.
    pub solve_budget: Duration,
    /// Time budget for one whole carving pass, shared with every
    /// uniqueness check inside it.
    pub carve_budget: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed_clues: 10..=15,
            max_seed_attempts: 64,
            solve_budget: Duration::from_millis(1300),
            carve_budget: Duration::from_secs(5),
        }
    }
}

/// The outcome of carving clues out of a solved grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarvedPuzzle {
    /// The deepest uniquely-solvable grid reached.
    pub puzzle: DigitGrid,
    /// `true` if the requested blank count was reached before the
    /// deadline. When `false`, `puzzle` has fewer blanks than requested
    /// but its solution is still proven unique.
    pub reached_target: bool,
}

/// A generated puzzle together with the solved grid it was carved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The partially blanked grid with exactly one solution.
    pub problem: DigitGrid,
    /// The complete grid `problem` was carved from; the unique solution
    /// of `problem`.
    pub solution: DigitGrid,
    /// Whether the requested blank count was reached.
    pub reached_target: bool,
}

/// Sudoku puzzle generator.
///
/// Stateless apart from its configuration: the random source is passed
/// into each operation, so a generator can be shared freely between
/// threads.
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

impl PuzzleGenerator {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with a custom configuration.
    #[must_use]
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Produces a fully solved grid.
    ///
    /// Seeds an all-blank grid with a few random legal clues and lets the
    /// solver complete it. A seeding the solver cannot complete within
    /// the budget is discarded and retried with fresh randomness; after
    /// [`GeneratorConfig::max_seed_attempts`] failures the canonical
    /// solved grid is returned so the operation always terminates.
    pub fn generate_solved<R>(&self, rng: &mut R) -> DigitGrid
    where
        R: Rng + ?Sized,
    {
        for attempt in 1..=self.config.max_seed_attempts {
            let seeded = self.seed_grid(rng);
            match solve(&seeded, Deadline::after(self.config.solve_budget)) {
                Ok(solutions) => {
                    if let Some(first) = solutions.first() {
                        return *first;
                    }
                    log::debug!("seed attempt {attempt} found no completion, reseeding");
                }
                Err(err) => {
                    log::debug!("seed attempt {attempt} rejected ({err}), reseeding");
                }
            }
        }
        log::warn!(
            "random seeding failed {} times, using the fallback solved grid",
            self.config.max_seed_attempts
        );
        fallback_solved()
    }

    /// Carves blanks into a solved grid while its solution stays unique.
    ///
    /// Picks a random filled cell, clears it, and re-proves uniqueness
    /// with the capped search; on success it recurses toward the target
    /// blank count, on failure it restores the cell and tries another.
    /// One deadline bounds the whole operation, including every inner
    /// uniqueness check. Uniqueness that a truncated search could not
    /// prove does not count, so the returned grid is never ambiguous.
    pub fn carve<R>(&self, solved: &DigitGrid, target_empty: usize, rng: &mut R) -> CarvedPuzzle
    where
        R: Rng + ?Sized,
    {
        let deadline = Deadline::after(self.config.carve_budget);
        let mut work = *solved;
        let mut best = *solved;
        let remaining = target_empty.saturating_sub(work.blank_count());
        let reached = self.carve_step(&mut work, remaining, deadline, rng, &mut best);
        if !reached {
            log::debug!(
                "carving stopped at {} blanks of {target_empty} requested",
                best.blank_count()
            );
        }
        CarvedPuzzle {
            puzzle: best,
            reached_target: reached,
        }
    }

    /// Generates a puzzle: a solved grid plus a carved problem with
    /// exactly one solution.
    pub fn generate<R>(&self, target_empty: usize, rng: &mut R) -> GeneratedPuzzle
    where
        R: Rng + ?Sized,
    {
        let solution = self.generate_solved(rng);
        let carved = self.carve(&solution, target_empty, rng);
        GeneratedPuzzle {
            problem: carved.puzzle,
            solution,
            reached_target: carved.reached_target,
        }
    }

    /// Places a handful of random clues on a blank grid, re-rolling any
    /// placement that lands on a filled cell or conflicts with an earlier
    /// clue.
    fn seed_grid<R>(&self, rng: &mut R) -> DigitGrid
    where
        R: Rng + ?Sized,
    {
        let clues = rng.random_range(self.config.seed_clues.clone());
        let mut grid = DigitGrid::new();
        for _ in 0..clues {
            loop {
                let pos = Position::new(rng.random_range(0..9), rng.random_range(0..9));
                let digit = Digit::from_value(rng.random_range(1..=9));
                if grid.get(pos).is_none() && cell_ok(&grid, pos, digit) {
                    grid.set(pos, digit);
                    break;
                }
            }
        }
        grid
    }

    fn carve_step<R>(
        &self,
        grid: &mut DigitGrid,
        remaining: usize,
        deadline: Deadline,
        rng: &mut R,
        best: &mut DigitGrid,
    ) -> bool
    where
        R: Rng + ?Sized,
    {
        if remaining == 0 {
            *best = *grid;
            return true;
        }
        if deadline.is_expired() {
            return false;
        }
        let mut filled: Vec<Position> = grid.filled_positions().collect();
        filled.shuffle(rng);
        for pos in filled {
            if deadline.is_expired() {
                return false;
            }
            let Some(digit) = grid.get(pos) else {
                continue;
            };
            grid.clear(pos);
            // A cleared clue keeps the grid valid and satisfiable, so solve
            // can only fail to *prove* uniqueness, never error.
            let still_unique =
                matches!(solve(grid, deadline), Ok(solutions) if solutions.unique().is_some());
            if still_unique {
                if grid.blank_count() > best.blank_count() {
                    *best = *grid;
                }
                if self.carve_step(grid, remaining - 1, deadline, rng, best) {
                    return true;
                }
            }
            grid.set(pos, digit);
        }
        false
    }
}

/// The canonical solved grid used when random seeding is exhausted.
fn fallback_solved() -> DigitGrid {
    DigitGrid::from_values([
        [1, 2, 3, 4, 5, 6, 7, 8, 9],
        [4, 5, 6, 7, 8, 9, 1, 2, 3],
        [7, 8, 9, 1, 2, 3, 4, 5, 6],
        [2, 3, 4, 5, 6, 7, 8, 9, 1],
        [5, 6, 7, 8, 9, 1, 2, 3, 4],
        [8, 9, 1, 2, 3, 4, 5, 6, 7],
        [3, 4, 5, 6, 7, 8, 9, 1, 2],
        [6, 7, 8, 9, 1, 2, 3, 4, 5],
        [9, 1, 2, 3, 4, 5, 6, 7, 8],
    ])
}
