//! Candidate enumeration for blank cells.

use cellwise_core::{Digit, DigitGrid, DigitSet, Position};

use crate::{error::SolveError, rules};

/// A blank cell together with its candidate digits.
///
/// Candidate sets are computed against the grid state at scan time; they
/// are not updated as search places digits, so the search re-validates
/// each placement against the current grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCell {
    /// The blank position.
    pub position: Position,
    /// The digits legal at `position` when the scan ran.
    pub candidates: DigitSet,
}

/// Computes the digits legal at a blank cell, in ascending order.
///
/// # Errors
///
/// Returns [`SolveError::Unsatisfiable`] when no digit fits: the grid as
/// currently filled cannot be completed through this cell, and the caller
/// must abandon the branch (or the whole grid).
pub fn candidates(grid: &DigitGrid, position: Position) -> Result<DigitSet, SolveError> {
    let set: DigitSet = Digit::ALL
        .into_iter()
        .filter(|&digit| rules::cell_ok(grid, position, digit))
        .collect();
    if set.is_empty() {
        return Err(SolveError::Unsatisfiable { position });
    }
    Ok(set)
}

/// Scans the grid once, row-major, computing the initial candidate set of
/// every blank cell.
///
/// The returned order is the enumeration order of the search.
///
/// # Errors
///
/// Returns [`SolveError::Unsatisfiable`] for the first blank cell with no
/// candidates; such a grid cannot be completed even when every filled
/// cell is individually legal.
pub fn find_empty_cells(grid: &DigitGrid) -> Result<Vec<EmptyCell>, SolveError> {
    let mut cells = Vec::with_capacity(grid.blank_count());
    for position in Position::all() {
        if grid.get(position).is_none() {
            let candidates = candidates(grid, position)?;
            cells.push(EmptyCell {
                position,
                candidates,
            });
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_on_empty_grid() {
        let grid = DigitGrid::new();
        let set = candidates(&grid, Position::new(0, 0)).unwrap();
        assert_eq!(set, DigitSet::FULL);
    }

    #[test]
    fn test_candidates_exclude_row_col_box() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(8, 0), Digit::D1); // row
        grid.set(Position::new(0, 8), Digit::D2); // column
        grid.set(Position::new(1, 1), Digit::D3); // box

        let set = candidates(&grid, Position::new(0, 0)).unwrap();
        assert_eq!(set.len(), 6);
        assert!(!set.contains(Digit::D1));
        assert!(!set.contains(Digit::D2));
        assert!(!set.contains(Digit::D3));
        assert!(set.contains(Digit::D4));
    }

    #[test]
    fn test_candidates_ascending_order() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(1, 0), Digit::D4);
        let set = candidates(&grid, Position::new(0, 0)).unwrap();
        let order: Vec<u8> = set.iter().map(Digit::value).collect();
        assert_eq!(order, vec![1, 2, 3, 5, 6, 7, 8, 9]);
    }

    // A valid grid whose cell (8, 0) has zero candidates: the row holds
    // 1-8 and the column holds 9.
    fn pinned_grid() -> DigitGrid {
        let mut grid = DigitGrid::new();
        for x in 0..8 {
            grid.set(Position::new(x, 0), Digit::from_value(x + 1));
        }
        grid.set(Position::new(8, 4), Digit::D9);
        grid
    }

    #[test]
    fn test_candidates_reports_unsatisfiable_cell() {
        let grid = pinned_grid();
        assert!(crate::rules::grid_ok(&grid));
        let err = candidates(&grid, Position::new(8, 0)).unwrap_err();
        assert_eq!(
            err,
            SolveError::Unsatisfiable {
                position: Position::new(8, 0)
            }
        );
    }

    #[test]
    fn test_find_empty_cells_row_major() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Digit::D1);
        grid.set(Position::new(4, 4), Digit::D5);

        let cells = find_empty_cells(&grid).unwrap();
        assert_eq!(cells.len(), 79);
        // Row-major order, skipping the filled cells
        assert_eq!(cells[0].position, Position::new(1, 0));
        let indices: Vec<usize> = cells.iter().map(|cell| cell.position.index()).collect();
        assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_find_empty_cells_propagates_unsatisfiable() {
        let err = find_empty_cells(&pinned_grid()).unwrap_err();
        assert_eq!(
            err,
            SolveError::Unsatisfiable {
                position: Position::new(8, 0)
            }
        );
    }

    #[test]
    fn test_find_empty_cells_on_full_grid() {
        let mut grid = DigitGrid::new();
        for pos in Position::all() {
            let value = (pos.x + 3 * pos.y + pos.y / 3) % 9 + 1;
            grid.set(pos, Digit::from_value(value));
        }
        assert!(grid.is_full());
        assert!(find_empty_cells(&grid).unwrap().is_empty());
    }
}
