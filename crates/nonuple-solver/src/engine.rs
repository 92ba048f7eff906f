//! Fixpoint propagation engine.

use nonuple_core::{Board, Position};

use crate::rule::{self, BoxedRule};

/// Statistics collected while running the deduction engine.
///
/// Tracks how many times each rule changed the board, in rule order, and the
/// number of full passes swept.
///
/// # Examples
///
/// ```
/// use nonuple_solver::{Board, Engine};
///
/// let engine = Engine::with_deduction_rules();
/// let mut board = Board::new();
/// let stats = engine.run(&mut board);
/// assert!(!stats.has_progress()); // nothing to deduce on an empty board
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStats {
    applications: Vec<u64>,
    passes: u64,
}

impl EngineStats {
    /// Returns rule application counts in engine rule order.
    ///
    /// Rules that never changed the board keep a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[u64] {
        &self.applications
    }

    /// Returns the number of full board sweeps performed.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Returns `true` if any rule changed the board at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.applications.iter().any(|&n| n > 0)
    }
}

/// Drives the deduction rules over a board until no rule makes progress.
///
/// Each pass sweeps all 81 cells in row-major order, applying the rules to
/// each cell in their fixed order. Passes repeat until one completes without
/// any change (the fixpoint). The engine is pure deduction: it never guesses
/// and never violates [`Board::is_valid`].
///
/// Running the engine again immediately after a fixpoint changes nothing.
///
/// # Examples
///
/// ```
/// use nonuple_solver::{Board, Engine};
///
/// let mut board: Board = "
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
///
/// let engine = Engine::with_deduction_rules();
/// let stats = engine.run(&mut board);
/// assert!(stats.has_progress());
/// assert!(board.is_complete()); // this grid falls to deduction alone
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    rules: Vec<BoxedRule>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_deduction_rules()
    }
}

impl Engine {
    /// Creates an engine with the specified rules.
    ///
    /// Rules are applied per cell in the order given. The standard rule
    /// order matters; see [`rule::deduction_rules`].
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates an engine with the standard deduction rules in their fixed
    /// order.
    #[must_use]
    pub fn with_deduction_rules() -> Self {
        Self::new(rule::deduction_rules())
    }

    /// Returns the configured rules in application order.
    ///
    /// The slice defines the index mapping used by
    /// [`EngineStats::applications`].
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Creates a statistics object aligned with this engine's rule order.
    #[must_use]
    pub fn new_stats(&self) -> EngineStats {
        EngineStats {
            applications: vec![0; self.rules.len()],
            passes: 0,
        }
    }

    /// Sweeps every cell once, applying each rule in order.
    ///
    /// Returns `true` if any rule changed the board.
    pub fn pass(&self, board: &mut Board, stats: &mut EngineStats) -> bool {
        debug_assert_eq!(self.rules.len(), stats.applications.len());
        let mut changed = false;
        for pos in Position::ALL {
            for (i, rule) in self.rules.iter().enumerate() {
                if rule.apply(board, pos) {
                    stats.applications[i] += 1;
                    changed = true;
                }
            }
        }
        stats.passes += 1;
        changed
    }

    /// Runs passes until a full sweep produces no change.
    pub fn run(&self, board: &mut Board) -> EngineStats {
        let mut stats = self.new_stats();
        self.run_with_stats(board, &mut stats);
        stats
    }

    /// Runs passes until a fixpoint, accumulating into an existing
    /// statistics object.
    pub fn run_with_stats(&self, board: &mut Board, stats: &mut EngineStats) {
        while self.pass(board, stats) {
            log::debug!(
                "pass {}: {} cells solved",
                stats.passes,
                board.solved_count()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use nonuple_core::{Cell, Digit};

    use super::*;

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    const PROPAGATION_ONLY: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    #[test]
    fn test_empty_board_makes_no_progress() {
        let engine = Engine::with_deduction_rules();
        let mut board = Board::new();
        let stats = engine.run(&mut board);

        assert!(!stats.has_progress());
        assert_eq!(stats.passes(), 1);
        assert_eq!(board.solved_count(), 0);
    }

    #[test]
    fn test_solves_by_propagation_alone() {
        let engine = Engine::with_deduction_rules();
        let mut board: Board = PROPAGATION_ONLY.parse().unwrap();

        let stats = engine.run(&mut board);

        assert!(stats.has_progress());
        assert!(board.is_complete());
        assert!(board.is_valid());
    }

    #[test]
    fn test_fixpoint_is_idempotent() {
        let engine = Engine::with_deduction_rules();
        let mut board: Board = PROPAGATION_ONLY.parse().unwrap();
        engine.run(&mut board);

        let before: Vec<Cell> = Position::ALL.iter().map(|p| board.cell(*p)).collect();
        let second = engine.run(&mut board);
        let after: Vec<Cell> = Position::ALL.iter().map(|p| board.cell(*p)).collect();

        assert!(!second.has_progress());
        assert_eq!(before, after);
    }

    #[test]
    fn test_propagation_preserves_validity() {
        let engine = Engine::with_deduction_rules();
        let mut board: Board = PROPAGATION_ONLY.parse().unwrap();
        let mut stats = engine.new_stats();

        // Validity holds after every individual pass
        while engine.pass(&mut board, &mut stats) {
            assert!(board.is_valid());
        }
        assert!(board.is_valid());
    }

    #[test]
    fn test_stats_track_rule_applications() {
        let engine = Engine::with_deduction_rules();
        let mut board = Board::new();
        // Create a naked single: row 0 holds 1..=8, so (0,8) must be 9
        for col in 0..8 {
            board.assign(Position::new(0, col), d(col + 1));
        }

        let stats = engine.run(&mut board);

        assert_eq!(stats.applications().len(), 3);
        // The eliminate rule (index 0) must have fired at least once
        assert!(stats.applications()[0] >= 1);
        assert_eq!(board.value(Position::new(0, 8)), Some(d(9)));
    }
}
