//! Board coordinates and 3×3 box membership.

use std::fmt::{self, Display};
use std::ops::RangeInclusive;

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom).
///
/// # Examples
///
/// ```
/// use cellwise_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.index(), 7 * 9 + 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column index (0-8).
    pub x: u8,
    /// Row index (0-8).
    pub y: u8,
}

impl Position {
    /// Creates a position from column and row indices.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range: ({x}, {y})");
        Self { x, y }
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.y) * 9 + usize::from(self.x)
    }

    /// Returns an iterator over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|y| (0..9).map(move |x| Self { x, y }))
    }

    /// Returns an iterator over the nine positions of the 3×3 box
    /// containing this position, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellwise_core::Position;
    ///
    /// let in_box: Vec<_> = Position::new(4, 0).box_positions().collect();
    /// assert_eq!(in_box.len(), 9);
    /// assert!(in_box.contains(&Position::new(3, 0)));
    /// assert!(in_box.contains(&Position::new(5, 2)));
    /// ```
    pub fn box_positions(self) -> impl Iterator<Item = Self> {
        band(self.y).flat_map(move |y| band(self.x).map(move |x| Self { x, y }))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Maps a row or column index to its containing band of the fixed
/// partition {0-2, 3-5, 6-8}.
///
/// This is the box-bounds query: the box containing a cell is the cross
/// product of the bands of its row and column.
///
/// # Panics
///
/// Panics if `index` is not in the range 0-8.
///
/// # Examples
///
/// ```
/// use cellwise_core::band;
///
/// assert_eq!(band(0), 0..=2);
/// assert_eq!(band(4), 3..=5);
/// assert_eq!(band(8), 6..=8);
/// ```
#[must_use]
pub fn band(index: u8) -> RangeInclusive<u8> {
    match index {
        0..=2 => 0..=2,
        3..=5 => 3..=5,
        6..=8 => 6..=8,
        _ => panic!("cell index out of range: {index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(Position::new(0, 0).index(), 0);
        assert_eq!(Position::new(8, 0).index(), 8);
        assert_eq!(Position::new(0, 1).index(), 9);
        assert_eq!(Position::new(8, 8).index(), 80);
    }

    #[test]
    fn test_all_covers_board_in_order() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 81);
        for (i, pos) in all.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_band_partition() {
        for i in 0..9 {
            let range = band(i);
            assert!(range.contains(&i));
            assert_eq!(range.end() - range.start(), 2);
            assert_eq!(range.start() % 3, 0);
        }
    }

    #[test]
    #[should_panic(expected = "cell index out of range: 9")]
    fn test_band_rejects_out_of_range() {
        let _ = band(9);
    }

    #[test]
    fn test_box_positions() {
        let in_box: Vec<_> = Position::new(7, 4).box_positions().collect();
        assert_eq!(in_box.len(), 9);
        for pos in &in_box {
            assert!((6..=8).contains(&pos.x));
            assert!((3..=5).contains(&pos.y));
        }
        assert!(in_box.contains(&Position::new(7, 4)));
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
