use qwixx_core::score::{self, PENALTY_COUNT};

use crate::GameError;

/// The penalty boxes of a score sheet.
///
/// Each box is an independent flag; any subset may be marked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Penalties {
    flags: [bool; PENALTY_COUNT],
}

impl Penalties {
    /// Creates a track with no penalties marked.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: [false; PENALTY_COUNT],
        }
    }

    /// Creates a track from raw flags.
    #[must_use]
    pub const fn from_flags(flags: [bool; PENALTY_COUNT]) -> Self {
        Self { flags }
    }

    /// Returns the raw flags.
    #[must_use]
    pub const fn flags(&self) -> [bool; PENALTY_COUNT] {
        self.flags
    }

    /// Returns whether penalty `index` is marked, or `None` if it does not exist.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.flags.get(index).copied()
    }

    /// Flips penalty `index` and returns its new state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PenaltyOutOfRange`] if `index` is not below
    /// [`PENALTY_COUNT`].
    pub fn toggle(&mut self, index: usize) -> Result<bool, GameError> {
        let flag = self
            .flags
            .get_mut(index)
            .ok_or(GameError::PenaltyOutOfRange { index })?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// Returns the number of marked penalties.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    /// Returns the (non-positive) penalty score.
    #[must_use]
    pub fn score(&self) -> i32 {
        score::penalty_score(self.active_count())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn toggle_flips_single_box() {
        let mut penalties = Penalties::new();
        assert_eq!(penalties.toggle(2), Ok(true));
        assert_eq!(penalties.flags(), [false, false, true, false]);
        assert_eq!(penalties.active_count(), 1);
        assert_eq!(penalties.score(), -5);

        assert_eq!(penalties.toggle(0), Ok(true));
        assert_eq!(penalties.score(), -10);
        assert_eq!(penalties.toggle(2), Ok(false));
        assert_eq!(penalties.get(2), Some(false));
        assert_eq!(penalties.score(), -5);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut penalties = Penalties::new();
        assert_eq!(
            penalties.toggle(PENALTY_COUNT),
            Err(GameError::PenaltyOutOfRange {
                index: PENALTY_COUNT
            })
        );
        assert_eq!(penalties, Penalties::new());
        assert_eq!(penalties.get(PENALTY_COUNT), None);
    }

    proptest! {
        #[test]
        fn toggle_twice_is_identity(
            flags in prop::array::uniform4(any::<bool>()),
            index in 0..PENALTY_COUNT,
        ) {
            let original = Penalties::from_flags(flags);
            let mut penalties = original.clone();
            penalties.toggle(index).unwrap();
            prop_assert_ne!(&penalties, &original);
            penalties.toggle(index).unwrap();
            prop_assert_eq!(penalties, original);
        }
    }
}
