use std::iter::FusedIterator;

use crate::{Number, NumberSet, NumberSetIter};

/// One of the four colored rows on a Qwixx score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Row {
    /// Red row, filled from 2 up to 12.
    #[display("red")]
    Red,
    /// Yellow row, filled from 2 up to 12.
    #[display("yellow")]
    Yellow,
    /// Green row, filled from 12 down to 2.
    #[display("green")]
    Green,
    /// Blue row, filled from 12 down to 2.
    #[display("blue")]
    Blue,
}

impl Row {
    /// All rows in sheet order (top to bottom).
    pub const ALL: [Self; 4] = [Self::Red, Self::Yellow, Self::Green, Self::Blue];

    /// Returns the crossing direction of this row.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Red | Self::Yellow => Direction::Ascending,
            Self::Green | Self::Blue => Direction::Descending,
        }
    }

    /// Returns the last number of the row, which must be crossed before the
    /// row can be locked.
    #[must_use]
    pub const fn extreme(self) -> Number {
        self.direction().last()
    }

    /// Returns the position of this row in [`Row::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Yellow => 1,
            Self::Green => 2,
            Self::Blue => 3,
        }
    }
}

/// The order in which a row's numbers are crossed, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 2, 3, ..., 12.
    Ascending,
    /// 12, 11, ..., 2.
    Descending,
}

impl Direction {
    /// Returns the leftmost number of a row with this direction.
    #[must_use]
    pub const fn first(self) -> Number {
        match self {
            Self::Ascending => Number::MIN,
            Self::Descending => Number::MAX,
        }
    }

    /// Returns the rightmost number of a row with this direction.
    #[must_use]
    pub const fn last(self) -> Number {
        match self {
            Self::Ascending => Number::MAX,
            Self::Descending => Number::MIN,
        }
    }

    /// Returns the rightmost crossed number, or `None` if nothing is crossed.
    ///
    /// This is the maximum for ascending rows and the minimum for descending
    /// rows.
    #[must_use]
    pub fn frontier(self, crossed: NumberSet) -> Option<Number> {
        match self {
            Self::Ascending => crossed.max(),
            Self::Descending => crossed.min(),
        }
    }

    /// Returns `true` if `number` is at or to the right of `frontier`.
    ///
    /// The frontier itself counts as reachable; whether it is already crossed
    /// is a separate question.
    #[must_use]
    pub fn is_reachable_from(self, frontier: Number, number: Number) -> bool {
        match self {
            Self::Ascending => number >= frontier,
            Self::Descending => number <= frontier,
        }
    }

    /// Returns `true` if `a` comes before `b` when reading the row left to
    /// right.
    #[must_use]
    pub fn precedes(self, a: Number, b: Number) -> bool {
        match self {
            Self::Ascending => a < b,
            Self::Descending => a > b,
        }
    }

    /// Iterates over `set` in this direction's order.
    ///
    /// # Examples
    ///
    /// ```
    /// use qwixx_core::{Direction, Number, NumberSet};
    ///
    /// let set: NumberSet = [10, 6, 12]
    ///     .into_iter()
    ///     .map(|v| Number::new(v).unwrap())
    ///     .collect();
    /// let order: Vec<u8> = Direction::Descending.ordered(set).map(Number::get).collect();
    /// assert_eq!(order, [12, 10, 6]);
    /// ```
    #[must_use]
    pub const fn ordered(self, set: NumberSet) -> Ordered {
        Ordered {
            inner: set.iter(),
            direction: self,
        }
    }

    /// Iterates over every number of a row, left to right.
    #[must_use]
    pub const fn numbers(self) -> Ordered {
        self.ordered(NumberSet::FULL)
    }
}

/// Iterator returned by [`Direction::ordered`].
#[derive(Debug, Clone)]
pub struct Ordered {
    inner: NumberSetIter,
    direction: Direction,
}

impl Iterator for Ordered {
    type Item = Number;

    fn next(&mut self) -> Option<Number> {
        match self.direction {
            Direction::Ascending => self.inner.next(),
            Direction::Descending => self.inner.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Ordered {}

impl FusedIterator for Ordered {}
