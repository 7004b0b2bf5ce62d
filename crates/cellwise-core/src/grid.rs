//! The 9×9 grid of optional digits.

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};

use crate::{digit::Digit, position::Position};

/// Error returned when a grid string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// The string contains a character that is neither a digit, a blank
    /// marker (`.`, `_`, `0`), nor whitespace.
    #[display("unexpected character {character:?} in grid string")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The string does not describe exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

/// A 9×9 sudoku grid; each cell holds a digit or is blank.
///
/// This is a plain value type: it is `Copy`, and every operation that
/// needs its own working state copies the whole grid. There is no shared
/// mutable state between concurrent searches.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use cellwise_core::{Digit, DigitGrid, Position};
///
/// let grid = DigitGrid::from_str(
///     "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
///     ",
/// )?;
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.blank_count(), 51);
/// # Ok::<(), cellwise_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an all-blank grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a grid from a row-major matrix of values 0-9, where 0
    /// means blank.
    ///
    /// This is the literal-matrix input boundary: external callers supply
    /// puzzles in exactly this shape.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    #[must_use]
    pub fn from_values(values: [[u8; 9]; 9]) -> Self {
        let mut grid = Self::new();
        for pos in Position::all() {
            let value = values[usize::from(pos.y)][usize::from(pos.x)];
            if value != 0 {
                grid.set(pos, Digit::from_value(value));
            }
        }
        grid
    }

    /// Returns the digit at `pos`, or `None` if the cell is blank.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places a digit at `pos`, overwriting any previous value.
    pub fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Blanks the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns `true` if no cell is blank.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of blank cells.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        81 - self.blank_count()
    }

    /// Returns an iterator over the filled positions in row-major order.
    pub fn filled_positions(&self) -> impl Iterator<Item = Position> {
        let cells = self.cells;
        Position::all().filter(move |pos| cells[pos.index()].is_some())
    }
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    /// Parses a grid string: digits 1-9 are filled cells, `.`, `_`, and
    /// `0` are blanks, all whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count: usize = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let digit = match character {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = character.to_digit(10).unwrap_or_default() as u8;
                    Some(Digit::from_value(value))
                }
                _ => return Err(GridParseError::UnexpectedCharacter { character }),
            };
            if count >= 81 {
                // Keep counting so the error reports the full size
                count += 1;
                continue;
            }
            if let Some(digit) = digit {
                #[expect(clippy::cast_possible_truncation)]
                let (x, y) = ((count % 9) as u8, (count / 9) as u8);
                grid.set(Position::new(x, y), digit);
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    /// Formats the grid in the same shape `from_str` accepts: nine rows,
    /// blanks as `_`, columns grouped in threes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..9 {
                if x == 3 || x == 6 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}
