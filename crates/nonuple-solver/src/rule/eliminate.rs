use nonuple_core::{Board, Dimension, Position};

use super::{BoxedRule, Rule};

const NAME: &str = "eliminate";

/// Removes candidates already assigned elsewhere in the cell's groupings.
///
/// For each of the cell's three groupings, every value assigned to another
/// cell of that grouping is removed from this cell's candidate set. If
/// exactly one candidate remains afterwards, it is assigned and the
/// candidate set cleared.
///
/// This is the rule that keeps a cell's candidate set consistent with its
/// neighbors; the other rules rely on it having run first.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate;

impl Eliminate {
    /// Creates a new `Eliminate` rule.
    #[must_use]
    pub const fn new() -> Self {
        Eliminate
    }
}

impl Rule for Eliminate {
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

        let mut changed = false;
        for dim in Dimension::ALL {
            for npos in dim.group_containing(pos) {
                if npos == pos {
                    continue;
                }
                if let Some(digit) = board.value(npos) {
                    changed |= board.remove_candidate(pos, digit);
                }
            }
        }

        if let Some(only) = board.candidates(pos).as_single() {
            board.assign(pos, only);
            changed = true;
        }
        changed
    }
}
