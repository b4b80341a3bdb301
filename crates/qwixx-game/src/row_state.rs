use qwixx_core::{
    Number, NumberSet, Ordered, Row,
    score::{self, MIN_CROSSES_TO_LOCK},
};

use crate::{GameError, LockOperation, SheetError};

/// The crosses and lock flag of one row.
///
/// Crosses are stored as a set; [`RowState::crossed_in_order`] yields them in
/// the row's direction, so the sequence is always sorted ascending for red and
/// yellow and descending for green and blue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    row: Row,
    crossed: NumberSet,
    locked: bool,
}

impl RowState {
    /// Creates an empty, unlocked row.
    #[must_use]
    pub const fn new(row: Row) -> Self {
        Self {
            row,
            crossed: NumberSet::EMPTY,
            locked: false,
        }
    }

    /// Rebuilds a row from raw crossed values and a lock flag.
    ///
    /// The values may be in any order.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::InvalidNumber`] for values outside 2 to 12,
    /// [`SheetError::DuplicateNumber`] for repeated values, and
    /// [`SheetError::IneligibleLock`] if `locked` is set but the row could not
    /// have been locked.
    pub fn from_parts(row: Row, crossed: &[u8], locked: bool) -> Result<Self, SheetError> {
        let mut set = NumberSet::new();
        for &value in crossed {
            let number =
                Number::new(value).ok_or(SheetError::InvalidNumber { row, value })?;
            if !set.insert(number) {
                return Err(SheetError::DuplicateNumber { row, number });
            }
        }
        let mut this = Self {
            row,
            crossed: set,
            locked: false,
        };
        if locked {
            this.lock_capability()
                .map_err(|_| SheetError::IneligibleLock { row })?;
            this.locked = true;
        }
        Ok(this)
    }

    /// Returns which row this is.
    #[must_use]
    pub const fn row(&self) -> Row {
        self.row
    }

    /// Returns the crossed numbers as a set.
    #[must_use]
    pub const fn crossed(&self) -> NumberSet {
        self.crossed
    }

    /// Returns the crossed numbers in the row's direction.
    #[must_use]
    pub const fn crossed_in_order(&self) -> Ordered {
        self.row.direction().ordered(self.crossed)
    }

    /// Returns the number of crosses.
    #[must_use]
    pub const fn cross_count(&self) -> usize {
        self.crossed.len()
    }

    /// Returns `true` if the row is locked.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns the rightmost crossed number, if any.
    #[must_use]
    pub fn frontier(&self) -> Option<Number> {
        self.row.direction().frontier(self.crossed)
    }

    /// Returns `true` if `number` may be crossed according to the
    /// left-to-right rule.
    ///
    /// Any number is valid on an empty row. Otherwise the number must not be
    /// crossed yet and must lie at or right of the frontier. The lock flag is
    /// not considered here; see [`RowState::cross_capability`].
    #[must_use]
    pub fn is_valid_cross(&self, number: Number) -> bool {
        if self.crossed.contains(number) {
            return false;
        }
        self.frontier().is_none_or(|frontier| {
            self.row
                .direction()
                .is_reachable_from(frontier, number)
        })
    }

    /// Returns whether `number` can be crossed, or why it cannot.
    ///
    /// # Errors
    ///
    /// Returns, in this order of precedence, [`GameError::RowLocked`],
    /// [`GameError::AlreadyCrossed`], or [`GameError::OutOfOrder`].
    pub fn cross_capability(&self, number: Number) -> Result<(), GameError> {
        if self.locked {
            return Err(GameError::RowLocked { row: self.row });
        }
        if self.crossed.contains(number) {
            return Err(GameError::AlreadyCrossed { number });
        }
        if let Some(frontier) = self.frontier()
            && !self.row.direction().is_reachable_from(frontier, number)
        {
            return Err(GameError::OutOfOrder { number, frontier });
        }
        Ok(())
    }

    /// Crosses `number`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`RowState::cross_capability`]; the row is left
    /// unchanged.
    pub fn cross(&mut self, number: Number) -> Result<(), GameError> {
        self.cross_capability(number)?;
        self.crossed.insert(number);
        Ok(())
    }

    /// Returns what [`RowState::toggle_lock`] would do.
    ///
    /// Unlocking is always allowed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotEnoughCrosses`] if fewer than five numbers are
    /// crossed, or [`GameError::ExtremeNotCrossed`] if the row's extreme number
    /// is missing.
    pub fn lock_capability(&self) -> Result<LockOperation, GameError> {
        if self.locked {
            return Ok(LockOperation::Unlock);
        }
        if self.crossed.len() < MIN_CROSSES_TO_LOCK {
            return Err(GameError::NotEnoughCrosses {
                crossed: self.crossed.len(),
            });
        }
        let extreme = self.row.extreme();
        if !self.crossed.contains(extreme) {
            return Err(GameError::ExtremeNotCrossed { extreme });
        }
        Ok(LockOperation::Lock)
    }

    /// Locks an unlocked row or unlocks a locked one.
    ///
    /// # Errors
    ///
    /// Returns the error from [`RowState::lock_capability`]; the row is left
    /// unchanged.
    pub fn toggle_lock(&mut self) -> Result<LockOperation, GameError> {
        let operation = self.lock_capability()?;
        self.locked = operation.is_lock();
        Ok(operation)
    }

    /// Returns the uncrossed numbers left of the frontier.
    ///
    /// These can never be crossed any more. The set is empty while nothing is
    /// crossed and while the row is locked.
    #[must_use]
    pub fn skipped(&self) -> NumberSet {
        if self.locked {
            return NumberSet::EMPTY;
        }
        let Some(frontier) = self.frontier() else {
            return NumberSet::EMPTY;
        };
        let direction = self.row.direction();
        direction
            .numbers()
            .filter(|&number| direction.precedes(number, frontier))
            .collect::<NumberSet>()
            & !self.crossed
    }

    /// Returns the row's score including the lock bonus.
    #[must_use]
    pub const fn total(&self) -> u32 {
        score::row_total(self.crossed.len(), self.locked)
    }
}
