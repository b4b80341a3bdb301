use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr, Not},
};

use crate::Number;

/// A set of [`Number`]s, stored as an 11-bit mask.
///
/// Bit 0 represents 2 and bit 10 represents 12, so iteration yields numbers
/// in ascending order. Use [`Direction::ordered`](crate::Direction::ordered)
/// to walk a set in a row's crossing order.
///
/// # Examples
///
/// ```
/// use qwixx_core::{Number, NumberSet};
///
/// let n = |v| Number::new(v).unwrap();
/// let set: NumberSet = [n(9), n(3), n(5)].into_iter().collect();
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.min(), Some(n(3)));
/// assert_eq!(set.max(), Some(n(9)));
/// assert_eq!(set.iter().map(Number::get).collect::<Vec<_>>(), [3, 5, 9]);
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberSet {
    bits: u16,
}

impl NumberSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };
    /// The set containing every number from 2 to 12.
    pub const FULL: Self = Self {
        bits: (1 << Number::ALL.len()) - 1,
    };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set has no elements.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if `number` is in the set.
    #[must_use]
    pub const fn contains(self, number: Number) -> bool {
        self.bits & (1 << number.bit_index()) != 0
    }

    /// Adds `number`, returning `true` if it was not already present.
    pub fn insert(&mut self, number: Number) -> bool {
        let added = !self.contains(number);
        self.bits |= 1 << number.bit_index();
        added
    }

    /// Removes `number`, returning `true` if it was present.
    pub fn remove(&mut self, number: Number) -> bool {
        let removed = self.contains(number);
        self.bits &= !(1 << number.bit_index());
        removed
    }

    /// Returns the smallest element.
    #[must_use]
    pub fn min(self) -> Option<Number> {
        self.iter().next()
    }

    /// Returns the largest element.
    #[must_use]
    pub fn max(self) -> Option<Number> {
        self.iter().next_back()
    }

    /// Returns an iterator over the elements in ascending order.
    #[must_use]
    pub const fn iter(self) -> NumberSetIter {
        NumberSetIter { bits: self.bits }
    }
}

impl fmt::Debug for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Number::get)).finish()
    }
}

impl BitOr for NumberSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitAnd for NumberSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl Not for NumberSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & Self::FULL.bits,
        }
    }
}

impl FromIterator<Number> for NumberSet {
    fn from_iter<T: IntoIterator<Item = Number>>(iter: T) -> Self {
        let mut set = Self::new();
        for number in iter {
            set.insert(number);
        }
        set
    }
}

impl IntoIterator for NumberSet {
    type Item = Number;
    type IntoIter = NumberSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`NumberSet`], ascending from the front.
#[derive(Debug, Clone)]
pub struct NumberSetIter {
    bits: u16,
}

impl Iterator for NumberSetIter {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Number::from_bit_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for NumberSetIter {
    fn next_back(&mut self) -> Option<Number> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = (u16::BITS - 1 - self.bits.leading_zeros()) as u8;
        self.bits &= !(1 << index);
        Some(Number::from_bit_index(index))
    }
}

impl ExactSizeIterator for NumberSetIter {}

impl FusedIterator for NumberSetIter {}
