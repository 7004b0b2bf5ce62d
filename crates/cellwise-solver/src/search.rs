//! Depth-first backtracking search with uniqueness cutoff and deadline
//! cancellation.

use std::time::{Duration, Instant};

use cellwise_core::DigitGrid;
use tinyvec::ArrayVec;

use crate::{
    candidates::{EmptyCell, find_empty_cells},
    error::SolveError,
    rules,
};

/// A cooperative cancellation deadline.
///
/// The search checks the deadline once per recursive step; there is no
/// preemption. An expired deadline makes the search unwind immediately,
/// keeping whatever solutions were already found.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    /// A deadline that never expires.
    pub const NONE: Self = Self { expires_at: None };

    /// Creates a deadline that expires `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now().checked_add(budget),
        }
    }

    /// Returns `true` once the deadline has passed.
    #[must_use]
    pub fn is_expired(self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

/// The result of one search invocation: at most two complete grids.
///
/// Zero grids means no solution was found, one means the puzzle may be
/// unique, two means it is ambiguous. The search stops enumerating as
/// soon as the second solution appears, so the count is never exact
/// beyond two.
///
/// When the deadline fired, the set is *inconclusive*: solutions it holds
/// are still fully valid, but solutions may exist that were never
/// reached. [`unique`](Self::unique) therefore only reports uniqueness
/// for searches that ran to completion.
#[derive(Debug, Clone, Default)]
pub struct SolutionSet {
    grids: ArrayVec<[DigitGrid; 2]>,
    deadline_hit: bool,
}

impl SolutionSet {
    /// Returns the solutions found, in discovery order.
    #[must_use]
    pub fn grids(&self) -> &[DigitGrid] {
        &self.grids
    }

    /// Returns the first solution found, if any.
    #[must_use]
    pub fn first(&self) -> Option<&DigitGrid> {
        self.grids.first()
    }

    /// Returns the number of solutions found (0-2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Returns `true` if no solution was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Returns `true` if at least two solutions exist.
    ///
    /// This is conclusive even under a deadline: both grids were actually
    /// found.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.grids.len() >= 2
    }

    /// Returns the proven-unique solution.
    ///
    /// `None` if zero or two solutions were found, or if the deadline
    /// fired: a truncated search finding one solution cannot rule out a
    /// second.
    #[must_use]
    pub fn unique(&self) -> Option<&DigitGrid> {
        if self.grids.len() == 1 && !self.deadline_hit {
            self.grids.first()
        } else {
            None
        }
    }

    /// Returns `true` if the deadline fired before the search completed.
    ///
    /// Callers must treat a smaller-than-expected set as inconclusive in
    /// that case, not as proof of unsatisfiability.
    #[must_use]
    pub fn deadline_hit(&self) -> bool {
        self.deadline_hit
    }
}

/// Solves a grid, enumerating at most two solutions.
///
/// The grid is validated first, then every blank cell gets its initial
/// candidate set in row-major order, then depth-first search assigns the
/// blanks in that order. Candidates are tried in ascending digit order
/// and re-validated against the grid as placed so far, which prunes
/// conflicting branches at the placement instead of deeper in the
/// recursion.
///
/// A fully filled valid grid yields a set containing exactly that grid.
///
/// # Errors
///
/// - [`SolveError::InvalidGrid`] if a filled cell violates a constraint.
/// - [`SolveError::Unsatisfiable`] if some blank cell has no candidates
///   at all.
///
/// An exhausted search (no solution, deadline not hit) is not an error;
/// it returns an empty set.
pub fn solve(grid: &DigitGrid, deadline: Deadline) -> Result<SolutionSet, SolveError> {
    if !rules::grid_ok(grid) {
        return Err(SolveError::InvalidGrid);
    }
    let cells = find_empty_cells(grid)?;
    let mut search = Search {
        cells: &cells,
        deadline,
        solutions: SolutionSet::default(),
    };
    let mut work = *grid;
    search.run(&mut work, 0);
    Ok(search.solutions)
}

struct Search<'a> {
    cells: &'a [EmptyCell],
    deadline: Deadline,
    solutions: SolutionSet,
}

impl Search<'_> {
    fn run(&mut self, grid: &mut DigitGrid, index: usize) {
        if self.deadline.is_expired() {
            self.solutions.deadline_hit = true;
            return;
        }
        let Some(cell) = self.cells.get(index) else {
            // Every blank is assigned; the placements are all validated.
            self.solutions.grids.push(*grid);
            return;
        };
        for digit in cell.candidates {
            if self.solutions.is_ambiguous() || self.solutions.deadline_hit {
                break;
            }
            // The scan-time candidate set is stale once earlier blanks are
            // assigned; re-check this one placement against the current grid.
            if !rules::cell_ok(grid, cell.position, digit) {
                continue;
            }
            grid.set(cell.position, digit);
            self.run(grid, index + 1);
            grid.clear(cell.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use cellwise_core::{Digit, Position};
    use proptest::prelude::*;

    use super::*;

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

    fn classic_solution() -> DigitGrid {
        DigitGrid::from_str(
            "534 678 912
             672 195 348
             198 342 567
             859 761 423
             426 853 791
             713 924 856
             961 537 284
             287 419 635
             345 286 179",
        )
        .unwrap()
    }

    fn position_at(index: usize) -> Position {
        #[expect(clippy::cast_possible_truncation)]
        Position::new((index % 9) as u8, (index / 9) as u8)
    }

    #[test]
    fn test_classic_puzzle_has_unique_solution() {
        let solutions = solve(&classic_puzzle(), Deadline::NONE).unwrap();
        assert_eq!(solutions.len(), 1);
        assert!(!solutions.deadline_hit());

        let solution = solutions.unique().unwrap();
        assert_eq!(solution.get(Position::new(2, 0)), Some(Digit::D4));
        assert_eq!(*solution, classic_solution());
    }

    #[test]
    fn test_empty_grid_is_ambiguous() {
        let solutions = solve(&DigitGrid::new(), Deadline::NONE).unwrap();
        assert_eq!(solutions.len(), 2);
        assert!(solutions.is_ambiguous());
        assert!(solutions.unique().is_none());
        // Both grids are genuine, distinct solutions
        assert!(rules::grid_ok(&solutions.grids()[0]));
        assert!(rules::grid_ok(&solutions.grids()[1]));
        assert!(solutions.grids()[0].is_full());
        assert_ne!(solutions.grids()[0], solutions.grids()[1]);
    }

    #[test]
    fn test_row_duplicate_is_invalid() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(1, 4), Digit::D6);
        grid.set(Position::new(7, 4), Digit::D6);
        assert_eq!(
            solve(&grid, Deadline::NONE).unwrap_err(),
            SolveError::InvalidGrid
        );
    }

    #[test]
    fn test_full_valid_grid_solves_to_itself() {
        let solution = classic_solution();
        let solutions = solve(&solution, Deadline::NONE).unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions.unique(), Some(&solution));
    }

    #[test]
    fn test_expired_deadline_is_inconclusive() {
        let solutions = solve(&classic_puzzle(), Deadline::after(Duration::ZERO)).unwrap();
        assert!(solutions.deadline_hit());
        assert!(solutions.is_empty());
        assert!(solutions.unique().is_none());
    }

    #[test]
    fn test_unsatisfiable_cell_is_rejected() {
        // Row 0 holds 1-8; the 9 in the same column pins (8, 0) to nothing.
        let mut grid = DigitGrid::new();
        for x in 0..8 {
            grid.set(Position::new(x, 0), Digit::from_value(x + 1));
        }
        grid.set(Position::new(8, 4), Digit::D9);
        assert_eq!(
            solve(&grid, Deadline::NONE).unwrap_err(),
            SolveError::Unsatisfiable {
                position: Position::new(8, 0)
            }
        );
    }

    #[test]
    fn test_solve_is_deterministic() {
        let first = solve(&classic_puzzle(), Deadline::NONE).unwrap();
        let second = solve(&classic_puzzle(), Deadline::NONE).unwrap();
        assert_eq!(first.grids(), second.grids());

        let first = solve(&DigitGrid::new(), Deadline::NONE).unwrap();
        let second = solve(&DigitGrid::new(), Deadline::NONE).unwrap();
        assert_eq!(first.grids(), second.grids());
    }

    proptest! {
        // Removing a clue can only grow (or keep) the set of satisfying
        // completions, and the search's found-count respects that.
        #[test]
        fn prop_removing_a_clue_never_decreases_solutions(
            cleared in prop::collection::btree_set(0usize..81, 0..45),
            extra in 0usize..81,
        ) {
            let mut puzzle = classic_solution();
            for &index in &cleared {
                puzzle.clear(position_at(index));
            }
            let before = solve(&puzzle, Deadline::NONE).unwrap();

            let mut wider = puzzle;
            wider.clear(position_at(extra));
            let after = solve(&wider, Deadline::NONE).unwrap();

            prop_assert!(after.len() >= before.len());
        }

        // Any sub-grid of a complete solution still admits that solution.
        #[test]
        fn prop_subgrid_of_solution_is_solvable(
            cleared in prop::collection::btree_set(0usize..81, 0..45),
        ) {
            let solution = classic_solution();
            let mut puzzle = solution;
            for &index in &cleared {
                puzzle.clear(position_at(index));
            }
            let solutions = solve(&puzzle, Deadline::NONE).unwrap();
            prop_assert!(!solutions.is_empty());
            // When the completion is unique it must be the original grid.
            if let Some(unique) = solutions.unique() {
                prop_assert_eq!(unique, &solution);
            }
        }
    }
}
