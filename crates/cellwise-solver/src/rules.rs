//! Row, column, and box legality predicates.
//!
//! Every predicate scans filled cells only and excludes the checked cell
//! itself. That exclusion lets one predicate serve two callers: "is this
//! already-placed digit legal" during full-grid validation, and "would
//! placing this digit here be legal" during search, without first
//! blanking the cell.

use cellwise_core::{Digit, DigitGrid, Position};

/// Returns `true` if no other cell in the row of `pos` holds `digit`.
#[must_use]
pub fn row_ok(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    (0..9).all(|x| x == pos.x || grid.get(Position::new(x, pos.y)) != Some(digit))
}

/// Returns `true` if no other cell in the column of `pos` holds `digit`.
#[must_use]
pub fn col_ok(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    (0..9).all(|y| y == pos.y || grid.get(Position::new(pos.x, y)) != Some(digit))
}

/// Returns `true` if no other cell in the 3×3 box of `pos` holds `digit`.
#[must_use]
pub fn box_ok(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    pos.box_positions()
        .all(|other| other == pos || grid.get(other) != Some(digit))
}

/// Returns `true` if placing (or keeping) `digit` at `pos` violates no
/// row, column, or box constraint.
///
/// This is the single legality predicate used by validation, candidate
/// enumeration, and search.
#[must_use]
pub fn cell_ok(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    box_ok(grid, pos, digit) && col_ok(grid, pos, digit) && row_ok(grid, pos, digit)
}

/// Returns `true` if every filled cell is legal with respect to its own
/// current value.
///
/// Blank cells are never checked; the absence of a value cannot violate a
/// constraint. This runs once, before search, to reject contradictory
/// input grids.
#[must_use]
pub fn grid_ok(grid: &DigitGrid) -> bool {
    Position::all().all(|pos| match grid.get(pos) {
        Some(digit) => cell_ok(grid, pos, digit),
        None => true,
    })
}
