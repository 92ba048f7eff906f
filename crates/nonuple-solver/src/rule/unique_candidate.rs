use nonuple_core::{Board, DigitSet, Dimension, Position};

use super::{BoxedRule, Rule};

const NAME: &str = "unique candidate";

/// Assigns a candidate that no other cell in some grouping can hold.
///
/// If one of the cell's candidates appears in the candidate set of no other
/// unsolved cell of a grouping, that grouping can only receive the digit
/// here, so it is assigned and the cell's candidates cleared.
///
/// Must run after [`Eliminate`](super::Eliminate) in the same pass: the
/// deduction is only sound when this cell's candidate set already reflects
/// its assigned neighbors.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueCandidate;

impl UniqueCandidate {
    /// Creates a new `UniqueCandidate` rule.
    #[must_use]
    pub const fn new() -> Self {
        UniqueCandidate
    }
}

impl Rule for UniqueCandidate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, pos: Position) -> bool {
        if board.value(pos).is_some() {
            return false;
        }

        for dim in Dimension::ALL {
            let mut others = DigitSet::EMPTY;
            for (_, cell) in board.neighbors_excluding(pos, dim) {
                others |= cell.candidates;
            }
            // Solved neighbors contribute nothing: their candidate sets are
            // empty.
            let unique = board.candidates(pos).difference(others);
            if let Some(digit) = unique.iter().next() {
                board.assign(pos, digit);
                return true;
            }
        }
        false
    }
}
