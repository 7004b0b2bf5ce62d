//! Backtracking sudoku solver with uniqueness detection.
//!
//! This crate is the constraint-satisfaction engine of the Cellwise
//! workspace. It is organized bottom-up:
//!
//! - [`rules`]: row/column/box legality predicates over a grid
//! - [`candidates`]: candidate enumeration for blank cells
//! - [`search`]: depth-first backtracking search, capped at two solutions
//!   and bounded by a cooperative [`Deadline`]
//!
//! The search never enumerates more than two solutions: its job is to
//! distinguish "no solution", "exactly one solution", and "more than one
//! solution", which is all that puzzle generation and validation need.
//!
//! # Examples
//!
//! ```
//! use cellwise_core::{Digit, DigitGrid, Position};
//! use cellwise_solver::{Deadline, solve};
//!
//! let puzzle = DigitGrid::from_values([
//!     [5, 3, 0, 0, 7, 0, 0, 0, 0],
//!     [6, 0, 0, 1, 9, 5, 0, 0, 0],
//!     [0, 9, 8, 0, 0, 0, 0, 6, 0],
//!     [8, 0, 0, 0, 6, 0, 0, 0, 3],
//!     [4, 0, 0, 8, 0, 3, 0, 0, 1],
//!     [7, 0, 0, 0, 2, 0, 0, 0, 6],
//!     [0, 6, 0, 0, 0, 0, 2, 8, 0],
//!     [0, 0, 0, 4, 1, 9, 0, 0, 5],
//!     [0, 0, 0, 0, 8, 0, 0, 7, 9],
//! ]);
//!
//! let solutions = solve(&puzzle, Deadline::NONE)?;
//! let solution = solutions.unique().expect("classic puzzle is unique");
//! assert_eq!(solution.get(Position::new(2, 0)), Some(Digit::D4));
//! # Ok::<(), cellwise_solver::SolveError>(())
//! ```

pub mod candidates;
pub mod error;
pub mod rules;
pub mod search;

pub use self::{
    candidates::{EmptyCell, candidates, find_empty_cells},
    error::SolveError,
    rules::{box_ok, cell_ok, col_ok, grid_ok, row_ok},
    search::{Deadline, SolutionSet, solve},
};
