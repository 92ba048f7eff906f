//! A set of candidate digits for a single cell.
//!
//! This module provides [`DigitSet`], a 9-bit set of digits 1-9 backed by a
//! `u16`. Bits 0-8 represent digits 1-9 respectively, giving compact storage
//! and fast set operations.
//!
//! # Examples
//!
//! ```
//! use nonuple_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::new(5).unwrap());
//! candidates.remove(Digit::new(7).unwrap());
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::new(5).unwrap()));
//! assert!(candidates.contains(Digit::new(1).unwrap()));
//! ```

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

const FULL_BITS: u16 = 0x1ff;

/// A set of digits 1-9, represented as a bitset.
///
/// Used for the candidate set of an unsolved cell and for scratch sets when
/// scanning a grouping (e.g. collecting the values already assigned in a row).
///
/// # Set Operations
///
/// ```
/// use nonuple_core::DigitSet;
///
/// let a: DigitSet = [1, 2, 3].into_iter().flat_map(nonuple_core::Digit::new).collect();
/// let b: DigitSet = [2, 3, 4].into_iter().flat_map(nonuple_core::Digit::new).collect();
///
/// assert_eq!((a | b).len(), 4); // union
/// assert_eq!((a & b).len(), 2); // intersection
/// assert_eq!(a.difference(b).len(), 1);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self { bits: FULL_BITS };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly one digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self {
            bits: 1 << digit.bit_index(),
        }
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = 1 << digit.bit_index();
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let bit = 1 << digit.bit_index();
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & (1 << digit.bit_index()) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the single digit in the set, or `None` if the set does not
    /// contain exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonuple_core::{Digit, DigitSet};
    ///
    /// let five = Digit::new(5).unwrap();
    /// assert_eq!(DigitSet::from_elem(five).as_single(), Some(five));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.bits.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            let index = self.bits.trailing_zeros() as u8;
            Some(Digit::from_bit_index(index))
        } else {
            None
        }
    }

    /// Removes and returns the smallest digit in the set.
    #[must_use]
    pub const fn pop_smallest(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_bit_index(index))
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { remaining: self }
    }

    /// Returns the raw bit representation (bits 0-8 for digits 1-9).
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.bits
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    remaining: DigitSet,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        self.remaining.pop_smallest()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
