//! Deduction and search for the nonuple engine.
//!
//! This crate layers two solving mechanisms over a
//! [`Board`](nonuple_core::Board):
//!
//! 1. **Deduction rules** ([`rule`]) — per-cell logical rules (candidate
//!    elimination, unique candidate, naked subset) driven to a fixpoint by
//!    the [`Engine`]. Deduction never guesses and never breaks board
//!    validity.
//! 2. **Backtracking search** ([`search`]) — when deduction stalls short of
//!    a complete board, the [`Solver`] explores guesses depth-first, using
//!    the board's snapshot stack to undo failed branches.
//!
//! An unsolvable puzzle is an ordinary outcome
//! ([`SolveOutcome::Unsolvable`]), not an error; only malformed construction
//! input fails with [`InputError`](nonuple_core::InputError).
//!
//! # Examples
//!
//! ```
//! use nonuple_solver::{Board, Solver};
//!
//! let mut board: Board = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let report = Solver::new().solve(&mut board);
//! assert!(report.solved());
//! assert!(board.is_complete());
//! ```

pub mod engine;
pub mod rule;
pub mod search;

pub use self::{
    engine::{Engine, EngineStats},
    search::{CancelToken, SolveOptions, SolveOutcome, SolveReport, Solver},
};
// Collaborators only need one import for the whole solving surface.
pub use nonuple_core::{Board, Cell, Digit, DigitSet, Dimension, InputError, Position};
