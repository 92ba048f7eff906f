//! A single grid cell.

use crate::{digit::Digit, digit_set::DigitSet};

/// One grid position: an optional assigned value plus the candidate set of
/// digits still possible for the cell.
///
/// Invariants maintained by [`Board`](crate::Board):
///
/// - an assigned cell has an empty candidate set;
/// - an unassigned cell has a non-empty candidate set unless the board has
///   reached a contradiction.
///
/// `Cell` is a plain value type; each cell owns its candidate set, so two
/// cells can never alias one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The assigned digit, or `None` while the cell is unsolved.
    pub value: Option<Digit>,
    /// The digits still possible for this cell. Empty once the cell is
    /// assigned.
    pub candidates: DigitSet,
}

impl Cell {
    /// An unsolved cell with the full candidate set.
    pub const UNSOLVED: Self = Self {
        value: None,
        candidates: DigitSet::FULL,
    };

    /// Creates a solved cell holding `digit` with no candidates.
    #[must_use]
    pub const fn solved(digit: Digit) -> Self {
        Self {
            value: Some(digit),
            candidates: DigitSet::EMPTY,
        }
    }

    /// Returns `true` if the cell has an assigned value.
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the cell is unsolved and has no candidates left.
    ///
    /// A contradicted cell means the current branch of the search cannot be
    /// completed; it is backtracking feedback, not an error.
    #[must_use]
    pub const fn is_contradicted(self) -> bool {
        self.value.is_none() && self.candidates.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::UNSOLVED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsolved_cell() {
        let cell = Cell::UNSOLVED;
        assert!(!cell.is_solved());
        assert!(!cell.is_contradicted());
        assert_eq!(cell.candidates.len(), 9);
    }

    #[test]
    fn test_solved_cell() {
        let five = Digit::new(5).unwrap();
        let cell = Cell::solved(five);
        assert!(cell.is_solved());
        assert!(!cell.is_contradicted());
        assert_eq!(cell.value, Some(five));
        assert!(cell.candidates.is_empty());
    }

    #[test]
    fn test_contradicted_cell() {
        let cell = Cell {
            value: None,
            candidates: DigitSet::EMPTY,
        };
        assert!(cell.is_contradicted());
    }

    #[test]
    fn test_cells_do_not_share_candidates() {
        // Mutating one cell's candidate set leaves a copy untouched
        let mut a = Cell::UNSOLVED;
        let b = a;
        a.candidates.remove(Digit::new(3).unwrap());
        assert_eq!(a.candidates.len(), 8);
        assert_eq!(b.candidates.len(), 9);
    }
}
