//! The three overlapping cell groupings: rows, columns, and boxes.

use crate::position::Position;

/// One of the three grouping kinds a cell belongs to.
///
/// Every cell is a member of exactly one row, one column, and one 3×3 box,
/// and each grouping holds exactly 9 cells. The enum is exhaustive, so an
/// unsupported grouping kind cannot be expressed by a caller.
///
/// # Examples
///
/// ```
/// use nonuple_core::{Dimension, Position};
///
/// let pos = Position::new(4, 7);
/// let row = Dimension::Row.group_containing(pos);
/// assert_eq!(row.len(), 9);
/// assert!(row.iter().all(|p| p.row() == 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// A row of 9 cells sharing the same row coordinate.
    Row,
    /// A column of 9 cells sharing the same column coordinate.
    Column,
    /// A 3×3 box of 9 cells.
    Box,
}

impl Dimension {
    /// All grouping kinds, in the order the deduction rules scan them.
    pub const ALL: [Self; 3] = [Self::Row, Self::Column, Self::Box];

    /// Returns the index (0-8) of the grouping of this kind that contains
    /// `pos`.
    #[must_use]
    pub const fn index_of(self, pos: Position) -> u8 {
        match self {
            Self::Row => pos.row(),
            Self::Column => pos.col(),
            Self::Box => pos.box_index(),
        }
    }

    /// Returns the 9 positions of the `index`-th grouping of this kind, in
    /// ascending row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn positions(self, index: u8) -> [Position; 9] {
        assert!(index < 9);
        let mut group = [Position::new(0, 0); 9];
        let mut i = 0;
        while i < 9 {
            #[expect(clippy::cast_possible_truncation)]
            let i8 = i as u8;
            group[i] = match self {
                Self::Row => Position::new(index, i8),
                Self::Column => Position::new(i8, index),
                Self::Box => Position::new((index / 3) * 3 + i8 / 3, (index % 3) * 3 + i8 % 3),
            };
            i += 1;
        }
        group
    }

    /// Returns the 9 positions of the grouping of this kind that contains
    /// `pos` (including `pos` itself).
    #[must_use]
    pub const fn group_containing(self, pos: Position) -> [Position; 9] {
        self.positions(self.index_of(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_have_nine_distinct_positions() {
        for dim in Dimension::ALL {
            for index in 0..9 {
                let group = dim.positions(index);
                for (i, a) in group.iter().enumerate() {
                    assert_eq!(dim.index_of(*a), index);
                    for b in &group[i + 1..] {
                        assert_ne!(a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_group_containing_includes_self() {
        for pos in Position::ALL {
            for dim in Dimension::ALL {
                assert!(dim.group_containing(pos).contains(&pos));
            }
        }
    }

    #[test]
    fn test_box_positions() {
        let group = Dimension::Box.positions(4);
        let expected: Vec<_> = [
            (3, 3),
            (3, 4),
            (3, 5),
            (4, 3),
            (4, 4),
            (4, 5),
            (5, 3),
            (5, 4),
            (5, 5),
        ]
        .into_iter()
        .map(|(r, c)| Position::new(r, c))
        .collect();
        assert_eq!(group.to_vec(), expected);
    }

    #[test]
    fn test_every_position_in_one_group_per_dimension() {
        // No cell belongs to two boxes (or two rows, or two columns)
        for dim in Dimension::ALL {
            for pos in Position::ALL {
                let count = (0..9)
                    .filter(|&i| dim.positions(i).contains(&pos))
                    .count();
                assert_eq!(count, 1);
            }
        }
    }
}
