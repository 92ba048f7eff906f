//! Digit representation.

use std::fmt::{self, Display};

/// A digit in the range 1-9.
///
/// The inner value is validated at construction, so every `Digit` in
/// circulation is a legal placement value. Board construction receives
/// untrusted `u8` input, which is why [`Digit::new`] is fallible rather than
/// panicking.
///
/// # Examples
///
/// ```
/// use nonuple_core::Digit;
///
/// let digit = Digit::new(5).unwrap();
/// assert_eq!(digit.value(), 5);
///
/// assert!(Digit::new(0).is_none());
/// assert!(Digit::new(10).is_none());
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Array containing all digits from 1 to 9 in ascending order.
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit from a `u8` value, returning `None` unless the value
    /// is in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonuple_core::Digit;
    ///
    /// assert_eq!(Digit::new(1).unwrap().value(), 1);
    /// assert_eq!(Digit::new(9).unwrap().value(), 9);
    /// assert!(Digit::new(0).is_none());
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if matches!(value, 1..=9) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the zero-based bit index of this digit (0-8).
    ///
    /// Used by [`DigitSet`](crate::DigitSet) to map digits onto bits.
    #[must_use]
    pub(crate) const fn bit_index(self) -> u8 {
        self.0 - 1
    }

    pub(crate) const fn from_bit_index(index: u8) -> Self {
        debug_assert!(index < 9);
        Self(index + 1)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
