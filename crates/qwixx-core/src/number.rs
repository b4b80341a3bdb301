/// A number printed on a score sheet row (2 to 12).
///
/// Numbers are the sums of two dice, so the valid range is fixed. The inner
/// value is private; use [`Number::new`] or [`TryFrom<u8>`] to construct one.
///
/// # Examples
///
/// ```
/// use qwixx_core::Number;
///
/// let seven = Number::new(7).unwrap();
/// assert_eq!(seven.get(), 7);
/// assert!(Number::new(1).is_none());
/// assert!(Number::new(13).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct Number(u8);

/// Error returned when converting an out-of-range integer into a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("number must be between 2 and 12, got {value}")]
pub struct NumberOutOfRange {
    /// The rejected value.
    pub value: u8,
}

impl Number {
    /// The lowest number on a row.
    pub const MIN: Self = Self(2);
    /// The highest number on a row.
    pub const MAX: Self = Self(12);

    /// All numbers in ascending order.
    pub const ALL: [Self; 11] = {
        let mut all = [Self::MIN; 11];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 11 {
            all[i] = Self(Self::MIN.0 + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a number, returning `None` if `value` is outside 2 to 12.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based bit index used by [`NumberSet`](crate::NumberSet).
    #[must_use]
    pub(crate) const fn bit_index(self) -> u8 {
        self.0 - Self::MIN.0
    }

    /// Inverse of [`Number::bit_index`].
    #[must_use]
    pub(crate) const fn from_bit_index(index: u8) -> Self {
        debug_assert!(index < 11);
        Self(index + Self::MIN.0)
    }
}

impl TryFrom<u8> for Number {
    type Error = NumberOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NumberOutOfRange { value })
    }
}

impl From<Number> for u8 {
    fn from(number: Number) -> Self {
        number.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for value in 2..=12 {
            assert_eq!(Number::new(value).map(Number::get), Some(value));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Number::try_from(0), Err(NumberOutOfRange { value: 0 }));
        assert_eq!(Number::try_from(1), Err(NumberOutOfRange { value: 1 }));
        assert_eq!(Number::try_from(13), Err(NumberOutOfRange { value: 13 }));
        assert_eq!(
            NumberOutOfRange { value: 13 }.to_string(),
            "number must be between 2 and 12, got 13"
        );
    }

    #[test]
    fn all_is_sorted_and_complete() {
        assert_eq!(Number::ALL.first(), Some(&Number::MIN));
        assert_eq!(Number::ALL.last(), Some(&Number::MAX));
        assert!(Number::ALL.windows(2).all(|w| w[0].get() + 1 == w[1].get()));
    }

    #[test]
    fn bit_index_roundtrip() {
        for number in Number::ALL {
            assert_eq!(Number::from_bit_index(number.bit_index()), number);
        }
    }
}
