//! The 81-cell board.
//!
//! [`Board`] owns the cells, exposes the row/column/box grouping queries the
//! deduction rules work from, and implements the snapshot stack that makes
//! backtracking search safe: every mutation made while a snapshot is pending
//! is journaled, and restoring rewinds the journal to reproduce the exact
//! pre-snapshot state.
//!
//! # Examples
//!
//! ```
//! use nonuple_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! let pos = Position::new(0, 0);
//!
//! board.save_state();
//! board.assign(pos, Digit::new(5).unwrap());
//! assert!(board.cell(pos).is_solved());
//!
//! board.restore_state();
//! assert!(!board.cell(pos).is_solved());
//! ```

use std::str::FromStr;

use crate::{
    cell::Cell, digit::Digit, digit_set::DigitSet, dimension::Dimension, error::InputError,
    position::Position,
};

/// A 9×9 grid of [`Cell`]s with grouping queries and a snapshot stack.
///
/// Cells are stored in row-major order and addressed by [`Position`]. The
/// three grouping kinds (row, column, box) are derived from positions via
/// [`Dimension`]; no cell belongs to two groupings of the same kind.
///
/// All cell mutation goes through [`assign`](Self::assign) and
/// [`remove_candidate`](Self::remove_candidate) so that pending snapshots see
/// every change.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; 81],
    /// Prior cell states, recorded while at least one snapshot is pending.
    journal: Vec<(u8, Cell)>,
    /// Journal watermarks, one per pending snapshot.
    marks: Vec<usize>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board: every cell unsolved with the full candidate
    /// set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Cell::UNSOLVED; 81],
            journal: Vec::new(),
            marks: Vec::new(),
        }
    }

    /// Builds a board from 81 values in row-major order, where `0` marks an
    /// unknown cell and 1-9 a given clue.
    ///
    /// Clue cells are assigned immediately and their candidate sets cleared;
    /// unknown cells keep the full candidate set.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::WrongLength`] if `values` does not hold exactly
    /// 81 entries, or [`InputError::ValueOutOfRange`] if any entry is
    /// outside 0-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonuple_core::{Board, Position};
    ///
    /// let mut values = [0_u8; 81];
    /// values[0] = 5;
    /// let board = Board::from_values(&values).unwrap();
    /// assert_eq!(board.value(Position::new(0, 0)).unwrap().value(), 5);
    /// ```
    pub fn from_values(values: &[u8]) -> Result<Self, InputError> {
        if values.len() != 81 {
            return Err(InputError::WrongLength { len: values.len() });
        }
        let mut board = Self::new();
        for (index, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let digit =
                Digit::new(value).ok_or(InputError::ValueOutOfRange { index, value })?;
            board.cells[index] = Cell::solved(digit);
        }
        Ok(board)
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[usize::from(pos.index())]
    }

    /// Returns the assigned value at `pos`, or `None` while unsolved.
    #[must_use]
    pub fn value(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).value
    }

    /// Returns the candidate set at `pos`.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        self.cell(pos).candidates
    }

    /// Returns the cells of the grouping of kind `dim` containing `pos`, in
    /// ascending position order, paired with their positions. Includes `pos`
    /// itself.
    pub fn neighbors(
        &self,
        pos: Position,
        dim: Dimension,
    ) -> impl Iterator<Item = (Position, Cell)> {
        dim.group_containing(pos)
            .into_iter()
            .map(|p| (p, self.cell(p)))
    }

    /// Like [`neighbors`](Self::neighbors), but omits `pos` itself.
    pub fn neighbors_excluding(
        &self,
        pos: Position,
        dim: Dimension,
    ) -> impl Iterator<Item = (Position, Cell)> {
        self.neighbors(pos, dim).filter(move |(p, _)| *p != pos)
    }

    /// Assigns `digit` at `pos`, clearing the cell's candidates.
    ///
    /// The previous cell state is journaled if a snapshot is pending.
    pub fn assign(&mut self, pos: Position, digit: Digit) {
        self.record(pos);
        self.cells[usize::from(pos.index())] = Cell::solved(digit);
    }

    /// Removes `digit` from the candidate set at `pos`.
    ///
    /// Returns `true` if the candidate was present. Does not assign the cell
    /// when one candidate remains; that decision belongs to the deduction
    /// rules.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        let index = usize::from(pos.index());
        if !self.cells[index].candidates.contains(digit) {
            return false;
        }
        self.record(pos);
        self.cells[index].candidates.remove(digit)
    }

    /// Returns `true` if no assigned digit appears twice in any row, column,
    /// or box.
    ///
    /// Unsolved cells are ignored; an incomplete board can be valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.groupings_satisfy(|seen, _count| seen.is_some())
    }

    /// Returns `true` if every row, column, and box contains each digit 1-9
    /// exactly once.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.groupings_satisfy(|seen, count| matches!(seen, Some(s) if s == DigitSet::FULL && count == 9))
    }

    /// Evaluates `pred` on the assigned-digit set of every grouping.
    ///
    /// `pred` receives `None` when a grouping holds a duplicate, otherwise
    /// the set of assigned digits and the number of assigned cells.
    fn groupings_satisfy<F>(&self, pred: F) -> bool
    where
        F: Fn(Option<DigitSet>, usize) -> bool,
    {
        for dim in Dimension::ALL {
            for index in 0..9 {
                let mut seen = DigitSet::EMPTY;
                let mut count = 0;
                let mut duplicate = false;
                for pos in dim.positions(index) {
                    if let Some(digit) = self.value(pos) {
                        duplicate |= !seen.insert(digit);
                        count += 1;
                    }
                }
                let seen = if duplicate { None } else { Some(seen) };
                if !pred(seen, count) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if some unsolved cell has an empty candidate set.
    ///
    /// This is the dead-end signal the search controller backtracks on.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_contradicted())
    }

    /// Returns the number of assigned cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_solved()).count()
    }

    /// Returns the first unsolved position in row-major order, or `None` if
    /// every cell is assigned.
    #[must_use]
    pub fn first_unsolved(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.value(*pos).is_none())
    }

    /// Returns the 81 cell values in row-major order, with `0` for unsolved
    /// cells.
    #[must_use]
    pub fn to_values(&self) -> [u8; 81] {
        let mut values = [0_u8; 81];
        for (value, cell) in values.iter_mut().zip(&self.cells) {
            if let Some(digit) = cell.value {
                *value = digit.value();
            }
        }
        values
    }

    /// Pushes a snapshot of the current board state.
    ///
    /// Implemented as a journal watermark rather than a full 81-cell copy:
    /// only cells mutated after this call are recorded, and
    /// [`restore_state`](Self::restore_state) rewinds them.
    pub fn save_state(&mut self) {
        self.marks.push(self.journal.len());
    }

    /// Pops the most recent snapshot, restoring every cell to its exact
    /// state at the matching [`save_state`](Self::save_state) call.
    ///
    /// # Panics
    ///
    /// Panics if no snapshot is pending. Calling `restore_state` without a
    /// matching `save_state` is a bug in the caller's save/restore
    /// discipline, not a recoverable condition.
    pub fn restore_state(&mut self) {
        let mark = self
            .marks
            .pop()
            .expect("restore_state called with no saved state");
        for (index, cell) in self.journal.split_off(mark).into_iter().rev() {
            self.cells[usize::from(index)] = cell;
        }
    }

    /// Returns the number of pending snapshots.
    #[must_use]
    pub fn saved_states(&self) -> usize {
        self.marks.len()
    }

    /// Drops all pending snapshots, keeping the current cell states.
    ///
    /// Used when a search succeeds: the guessed state is kept and the
    /// snapshots along the success path are no longer needed.
    pub fn clear_saved(&mut self) {
        self.marks.clear();
        self.journal.clear();
    }

    /// Records the current state of `pos` in the journal if a snapshot is
    /// pending.
    fn record(&mut self, pos: Position) {
        if !self.marks.is_empty() {
            self.journal.push((pos.index(), self.cell(pos)));
        }
    }
}

impl FromStr for Board {
    type Err = InputError;

    /// Parses a grid string: digits 1-9 are clues, `0`, `_`, and `.` are
    /// blanks, and whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonuple_core::Board;
    ///
    /// let board: Board = "
    ///     53_ _7_ ___
    ///     6__ 195 ___
    ///     _98 ___ _6_
    ///     8__ _6_ __3
    ///     4__ 8_3 __1
    ///     7__ _2_ __6
    ///     _6_ ___ 28_
    ///     ___ 419 __5
    ///     ___ _8_ _79
    /// "
    /// .parse()
    /// .unwrap();
    /// assert_eq!(board.solved_count(), 30);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::with_capacity(81);
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            match ch {
                '0' | '_' | '.' => values.push(0),
                '1'..='9' => {
                    // Cast is safe: `ch` is an ASCII digit
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch.to_digit(10).unwrap_or(0) as u8;
                    values.push(value);
                }
                _ => return Err(InputError::InvalidCharacter { ch }),
            }
        }
        Self::from_values(&values)
    }
}
