//! Board positions.

use std::fmt::{self, Display};

/// A board position identified by row and column, both in the range 0-8.
///
/// Positions also carry derived indexing: a row-major cell index 0-80 and the
/// index of the 3×3 box containing the cell.
///
/// # Examples
///
/// ```
/// use nonuple_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.index(), 43);
/// assert_eq!(pos.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self {
            row: index / 9,
            col: index % 9,
        }
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.row * 9 + self.col
    }

    /// Returns the index of the 3×3 box containing this position (0-8, left
    /// to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(usize::from(pos.index()), i);
            assert_eq!(Position::from_index(pos.index()), *pos);
        }
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(0, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);

        // Each box contains exactly 9 positions
        for b in 0..9 {
            let count = Position::ALL.iter().filter(|p| p.box_index() == b).count();
            assert_eq!(count, 9);
        }
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_row_out_of_range_panics() {
        let _ = Position::new(9, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, 7).to_string(), "R3C7");
    }
}
