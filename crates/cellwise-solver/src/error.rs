//! Solver error taxonomy.

use cellwise_core::Position;
use derive_more::{Display, Error};

/// Errors that reject a grid before search begins.
///
/// Both variants are fatal to the `solve` call that produced them and are
/// never retried inside the engine. A search that merely finds no solution
/// is not an error at this level; it returns an empty
/// [`SolutionSet`](crate::SolutionSet), and callers that require at least
/// one solution treat that as their own no-solution condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolveError {
    /// A filled cell already violates row, column, or box uniqueness.
    #[display("grid violates row, column, or box uniqueness")]
    InvalidGrid,
    /// Some blank cell has no legal digit under the current filled cells,
    /// so the grid cannot be completed.
    #[display("no candidate digit fits the blank cell at {position}")]
    Unsatisfiable {
        /// The blank cell with an empty candidate set.
        position: Position,
    },
}
