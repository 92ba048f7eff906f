//! Construction error types.

/// An error describing malformed board construction input.
///
/// Malformed input is rejected when the board is built; it never reaches
/// propagation or search.
///
/// # Examples
///
/// ```
/// use nonuple_core::{Board, InputError};
///
/// let err = Board::from_values(&[0; 80]).unwrap_err();
/// assert_eq!(err, InputError::WrongLength { len: 80 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The input sequence did not contain exactly 81 values.
    #[display("expected 81 values, got {len}")]
    WrongLength {
        /// Number of values actually provided.
        len: usize,
    },
    /// A value outside the range 0-9 was provided.
    #[display("value {value} at cell index {index} is outside 0-9")]
    ValueOutOfRange {
        /// Row-major index of the offending value.
        index: usize,
        /// The offending value.
        value: u8,
    },
    /// A grid string contained a character that is not a digit, a blank
    /// marker (`0`, `_`, `.`), or whitespace.
    #[display("invalid character {ch:?} in grid string")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}
