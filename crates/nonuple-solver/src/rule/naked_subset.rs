use nonuple_core::{Board, Dimension, Position};

use super::{BoxedRule, Rule};

const NAME: &str = "naked subset";

/// Eliminates the digits of a naked subset from the rest of its grouping.
///
/// Let `S` be this cell's candidate set. If the number of cells in a
/// grouping whose candidate set is exactly `S` (including this cell) equals
/// `|S|`, those cells must hold exactly the digits of `S` among themselves,
/// so `S`'s digits are removed from every other cell of the grouping.
///
/// Only same-size identical candidate sets are matched (classic naked
/// pairs/triples/...); hidden subsets are out of scope. Must run after
/// [`Eliminate`](super::Eliminate) in the same pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSubset;

impl NakedSubset {
    /// Creates a new `NakedSubset` rule.
    #[must_use]
    pub const fn new() -> Self {
        NakedSubset
    }
}

impl Rule for NakedSubset {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, pos: Position) -> bool {
        let set = board.candidates(pos);
        if board.value(pos).is_some() || set.is_empty() {
            return false;
        }

        let mut changed = false;
        for dim in Dimension::ALL {
            let group = dim.group_containing(pos);
            let matching = group
                .iter()
                .filter(|&&p| board.candidates(p) == set)
                .count();
            if matching != set.len() {
                continue;
            }
            for p in group {
                if p == pos || board.candidates(p) == set {
                    continue;
                }
                for digit in set {
                    changed |= board.remove_candidate(p, digit);
                }
            }
        }
        changed
    }
}
