//! Core data structures for the nonuple solving engine.
//!
//! This crate provides the board model shared by the deduction and search
//! layers. It performs no I/O and knows nothing about how puzzles are loaded
//! or displayed.
//!
//! # Overview
//!
//! The crate is organized leaf-first:
//!
//! 1. **Scalar types**
//!    - [`digit`]: Type-safe representation of digits 1-9
//!    - [`position`]: Row/column coordinates with row-major and box indexing
//!    - [`dimension`]: The three overlapping groupings (row, column, box)
//! 2. **Cell state**
//!    - [`digit_set`]: A 9-bit candidate set
//!    - [`cell`]: One grid position, an optional value plus its candidates
//! 3. **The board**
//!    - [`board`]: 81 cells, grouping queries, validity and completion
//!      checks, and a journaled snapshot stack for backtracking
//!
//! # Examples
//!
//! ```
//! use nonuple_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.assign(Position::new(4, 4), Digit::new(5).unwrap());
//!
//! assert!(board.is_valid());
//! assert!(!board.is_complete());
//! assert_eq!(board.solved_count(), 1);
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod dimension;
pub mod error;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::Board, cell::Cell, digit::Digit, digit_set::DigitSet, dimension::Dimension,
    error::InputError, position::Position,
};
