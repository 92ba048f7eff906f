//! Per-cell deduction rules.
//!
//! Each rule implements the [`Rule`] trait and is applied to one cell at a
//! time. The rules are ordered: later rules assume the earlier ones have
//! already run on the same cell in the same pass (unique-candidate and
//! naked-subset both require the cell's candidate set to be up to date with
//! its assigned neighbors).

use std::fmt::Debug;

use nonuple_core::{Board, Position};

pub use self::{
    eliminate::Eliminate, naked_subset::NakedSubset, unique_candidate::UniqueCandidate,
};

mod eliminate;
mod naked_subset;
mod unique_candidate;

/// Returns the deduction rules in their fixed application order:
/// eliminate, unique-candidate, naked-subset.
///
/// # Examples
///
/// ```
/// use nonuple_solver::rule;
///
/// let rules = rule::deduction_rules();
/// assert_eq!(rules.len(), 3);
/// assert_eq!(rules[0].name(), "eliminate");
/// ```
#[must_use]
pub fn deduction_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(UniqueCandidate::new()),
        Box::new(NakedSubset::new()),
    ]
}

/// A per-cell deduction rule.
///
/// Rules mutate candidate sets and assign cell values; they never guess.
/// A rule reports whether it changed the board so the engine can detect a
/// fixpoint.
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule to the cell at `pos`.
    ///
    /// Returns `true` if any cell value or candidate set changed.
    fn apply(&self, board: &mut Board, pos: Position) -> bool;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
