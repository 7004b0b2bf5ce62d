//! Core data structures for the Cellwise Sudoku workspace.
//!
//! This crate provides the grid model shared by the solver and generator
//! crates: type-safe digits, candidate sets, board positions, and the
//! 9×9 grid itself. It contains structure and accessors only; constraint
//! checking and search live in `cellwise-solver`.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: Sets of digits backed by a bitmask, iterated in
//!   ascending order
//! - [`position`]: Board coordinates and 3×3 box membership
//! - [`grid`]: The 9×9 grid of optional digits, with parsing and
//!   formatting
//!
//! # Examples
//!
//! ```
//! use cellwise_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Digit::D5);
//!
//! assert_eq!(grid.get(Position::new(4, 4)), Some(Digit::D5));
//! assert_eq!(grid.blank_count(), 80);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridParseError},
    position::{Position, band},
};
