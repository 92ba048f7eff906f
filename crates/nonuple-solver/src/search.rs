//! Backtracking search controller.
//!
//! When the deduction engine stalls on an incomplete board, the [`Solver`]
//! explores guesses depth-first. The search is an explicit iterative loop
//! over a frame stack rather than mutual recursion, which bounds stack depth
//! deterministically and gives the cancellation poll a single place to live.
//!
//! Save/restore discipline: a snapshot is taken immediately before each
//! guess and restored before any sibling guess is attempted, so the board
//! state seen by every branch is exactly the state its parent produced.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use nonuple_core::{Board, DigitSet, Position};
use tinyvec::TinyVec;

use crate::engine::{Engine, EngineStats};

/// A cloneable handle for cancelling a running solve.
///
/// The token is polled before every guess; once cancelled, the solve unwinds
/// its pending snapshots and reports [`SolveOutcome::Aborted`].
///
/// # Examples
///
/// ```
/// use nonuple_solver::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a new, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. All clones observe the request.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns `true` if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Options bounding a solve.
///
/// The search itself always terminates (depth ≤ 81, branching ≤ 9), but
/// degenerate puzzles can still take a long wall-clock time; callers that
/// need a bound set a guess budget, a cancellation token, or both.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Maximum number of guesses before the solve aborts.
    pub max_guesses: Option<u64>,
    /// Cooperative cancellation handle, polled before every guess.
    pub cancel: Option<CancelToken>,
}

/// The terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The board was completed; the solved state is kept on the board.
    Solved,
    /// Deduction and search were exhausted without completing the board.
    /// This is an ordinary outcome, not an error.
    Unsolvable,
    /// The guess budget ran out or cancellation was requested. The board is
    /// left in its propagated pre-search state.
    Aborted,
}

/// The result of a solve: outcome, guess count, and engine statistics.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Terminal state of the solve.
    pub outcome: SolveOutcome,
    /// Number of guesses made by the search controller. Zero when deduction
    /// alone completed the board.
    pub guesses: u64,
    /// Deduction statistics accumulated across the whole solve, including
    /// propagation inside search branches.
    pub engine: EngineStats,
}

impl SolveReport {
    /// Returns `true` if the board was completed.
    #[must_use]
    pub fn solved(&self) -> bool {
        self.outcome == SolveOutcome::Solved
    }
}

/// One level of the depth-first search: a target cell and the candidates not
/// yet tried for it.
#[derive(Debug, Clone, Copy, Default)]
struct Frame {
    cell: u8,
    remaining: DigitSet,
}

/// Combines the deduction engine with iterative backtracking search.
///
/// A solve first validates the board unconditionally, then runs the engine
/// to a fixpoint. If the board is still incomplete, the search controller
/// picks the first unsolved cell in row-major order and tries its candidates
/// in ascending order, saving board state before each guess and restoring it
/// when a branch fails. Both choices are deterministic, so repeat solves of
/// the same puzzle produce identical grids.
///
/// # Examples
///
/// ```
/// use nonuple_solver::{Board, Solver};
///
/// // Deduction stalls on this grid; search finishes it
/// let mut board: Board = "
///     1__ __7 _9_
///     _3_ _2_ __8
///     __9 6__ 5__
///     __5 3__ 9__
///     _1_ _8_ __2
///     6__ __4 ___
///     3__ ___ _1_
///     _4_ ___ __7
///     __7 ___ 3__
/// "
/// .parse()
/// .unwrap();
///
/// let report = Solver::new().solve(&mut board);
/// assert!(report.solved());
/// assert!(board.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    engine: Engine,
}

impl Solver {
    /// Creates a solver with the standard deduction rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver driving a custom engine.
    #[must_use]
    pub fn with_engine(engine: Engine) -> Self {
        Self { engine }
    }

    /// Solves the board in place with default options (no budget, no
    /// cancellation).
    pub fn solve(&self, board: &mut Board) -> SolveReport {
        self.solve_with_options(board, &SolveOptions::default())
    }

    /// Solves the board in place.
    ///
    /// On [`SolveOutcome::Solved`] the board holds the completed grid. On
    /// [`SolveOutcome::Unsolvable`] with duplicate givens the board is
    /// untouched; otherwise it is left in the stalled propagated state. On
    /// [`SolveOutcome::Aborted`] all pending guesses are undone.
    pub fn solve_with_options(&self, board: &mut Board, options: &SolveOptions) -> SolveReport {
        debug_assert_eq!(
            board.saved_states(),
            0,
            "the board is exclusively owned by the solve; no caller snapshots may be pending"
        );
        let mut stats = self.engine.new_stats();
        let mut guesses = 0_u64;

        // Validate unconditionally before propagation begins. A board that
        // already breaks the rules is reported as unsolvable without any
        // mutation.
        if !board.is_valid() {
            log::debug!("input board is invalid; not solving");
            return report(SolveOutcome::Unsolvable, guesses, stats);
        }

        self.engine.run_with_stats(board, &mut stats);
        if board.is_complete() {
            return report(SolveOutcome::Solved, guesses, stats);
        }
        if !board.is_valid() || board.has_contradiction() {
            return report(SolveOutcome::Unsolvable, guesses, stats);
        }

        // Deduction stalled: search. Each frame below the top has exactly
        // one applied guess with its snapshot pending on the board.
        let mut frames: TinyVec<[Frame; 16]> = TinyVec::new();
        frames.push(open_frame(board));

        while let Some(frame) = frames.last_mut() {
            if exhausted(options, guesses) {
                while board.saved_states() > 0 {
                    board.restore_state();
                }
                log::debug!("search aborted after {guesses} guesses");
                return report(SolveOutcome::Aborted, guesses, stats);
            }

            let target = Position::from_index(frame.cell);
            match frame.remaining.pop_smallest() {
                Some(digit) => {
                    guesses += 1;
                    log::trace!("guess {digit} at {target} (depth {})", frames.len());
                    board.save_state();
                    board.assign(target, digit);
                    self.engine.run_with_stats(board, &mut stats);

                    if board.is_complete() {
                        // Success: keep the state, drop the snapshots.
                        board.clear_saved();
                        log::debug!("solved after {guesses} guesses");
                        return report(SolveOutcome::Solved, guesses, stats);
                    }
                    if board.is_valid() && !board.has_contradiction() {
                        frames.push(open_frame(board));
                    } else {
                        // Dead end: undo this guess, try the next candidate.
                        log::trace!("contradiction; retracting {digit} at {target}");
                        board.restore_state();
                    }
                }
                None => {
                    // Every candidate of this frame failed; undo the parent
                    // guess that opened it and resume there.
                    frames.pop();
                    if !frames.is_empty() {
                        board.restore_state();
                    }
                }
            }
        }

        log::debug!("exhausted search after {guesses} guesses");
        report(SolveOutcome::Unsolvable, guesses, stats)
    }
}

/// Opens a search frame for the first unsolved cell in row-major order.
fn open_frame(board: &Board) -> Frame {
    let target = board
        .first_unsolved()
        .expect("incomplete board has an unsolved cell");
    Frame {
        cell: target.index(),
        remaining: board.candidates(target),
    }
}

fn exhausted(options: &SolveOptions, guesses: u64) -> bool {
    if options.max_guesses.is_some_and(|max| guesses >= max) {
        return true;
    }
    options.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
}

fn report(outcome: SolveOutcome, guesses: u64, engine: EngineStats) -> SolveReport {
    SolveReport {
        outcome,
        guesses,
        engine,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stalls all three deduction rules; only search completes it.
    const SEARCH_REQUIRED: &str = "
        1__ __7 _9_
        _3_ _2_ __8
        __9 6__ 5__
        __5 3__ 9__
        _1_ _8_ __2
        6__ __4 ___
        3__ ___ _1_
        _4_ ___ __7
        __7 ___ 3__
    ";

    #[test]
    fn test_deduction_alone_stalls_on_search_grid() {
        // Guards the fixture: if propagation ever completes this grid, the
        // search tests below stop exercising the guess loop.
        let mut board: Board = SEARCH_REQUIRED.parse().unwrap();
        Engine::with_deduction_rules().run(&mut board);

        assert!(!board.is_complete());
        assert!(board.is_valid());
        assert!(!board.has_contradiction());
    }

    #[test]
    fn test_solves_with_search() {
        let mut board: Board = SEARCH_REQUIRED.parse().unwrap();
        let clues = board.to_values();

        let report = Solver::new().solve(&mut board);

        assert!(report.solved());
        assert!(report.guesses > 0, "expected the search to guess");
        assert!(board.is_complete());
        assert!(board.is_valid());

        // Givens survive the search
        let solved = board.to_values();
        for (given, cell) in clues.iter().zip(&solved) {
            if *given != 0 {
                assert_eq!(given, cell);
            }
        }
    }

    #[test]
    fn test_solve_is_deterministic() {
        let solver = Solver::new();

        let mut first: Board = SEARCH_REQUIRED.parse().unwrap();
        let mut second: Board = SEARCH_REQUIRED.parse().unwrap();
        solver.solve(&mut first);
        solver.solve(&mut second);

        assert_eq!(first.to_values(), second.to_values());
    }

    #[test]
    fn test_invalid_board_is_unsolvable_without_mutation() {
        // Two 5s in the first row
        let mut values = [0_u8; 81];
        values[0] = 5;
        values[3] = 5;
        let mut board = Board::from_values(&values).unwrap();

        let report = Solver::new().solve(&mut board);

        assert_eq!(report.outcome, SolveOutcome::Unsolvable);
        assert!(!report.solved());
        assert_eq!(report.guesses, 0);
        assert_eq!(board.to_values(), values);
    }

    #[test]
    fn test_guess_budget_aborts() {
        let mut board: Board = SEARCH_REQUIRED.parse().unwrap();
        let options = SolveOptions {
            max_guesses: Some(0),
            ..SolveOptions::default()
        };

        let report = Solver::new().solve_with_options(&mut board, &options);

        assert_eq!(report.outcome, SolveOutcome::Aborted);
        assert_eq!(report.guesses, 0);
        assert_eq!(board.saved_states(), 0);
        assert!(!board.is_complete());
    }

    #[test]
    fn test_cancel_token_aborts() {
        let mut board: Board = SEARCH_REQUIRED.parse().unwrap();
        let token = CancelToken::new();
        token.cancel();
        let options = SolveOptions {
            max_guesses: None,
            cancel: Some(token),
        };

        let report = Solver::new().solve_with_options(&mut board, &options);

        assert_eq!(report.outcome, SolveOutcome::Aborted);
        assert!(!board.is_complete());
    }

    #[test]
    fn test_no_snapshots_leak_after_solve() {
        let mut board: Board = SEARCH_REQUIRED.parse().unwrap();
        let report = Solver::new().solve(&mut board);
        assert!(report.solved());
        assert_eq!(board.saved_states(), 0);
    }
}
