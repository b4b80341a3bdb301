use qwixx_core::{Number, Row, score::PENALTY_COUNT};

use crate::{GameError, LockOperation, Penalties, RowState, ScoreSummary, SheetError};

/// A single player's Qwixx score sheet.
///
/// The sheet applies every rule before mutating, so a failed operation never
/// leaves a partial change behind. Cloning a sheet produces an independent
/// snapshot, which is how undo history is kept by callers.
///
/// # Example
///
/// ```
/// use qwixx_core::{Number, Row};
/// use qwixx_game::ScoreSheet;
///
/// let n = |v| Number::new(v).unwrap();
/// let mut sheet = ScoreSheet::new();
///
/// sheet.cross_number(Row::Red, n(5)).unwrap();
/// sheet.cross_number(Row::Red, n(8)).unwrap();
/// assert!(sheet.cross_number(Row::Red, n(3)).is_err()); // left of 8
///
/// sheet.toggle_penalty(0).unwrap();
///
/// let summary = sheet.summary();
/// assert_eq!(summary.total, 3);
/// assert_eq!(summary.penalty_score, -5);
/// assert_eq!(summary.grand_total, -2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSheet {
    rows: [RowState; 4],
    penalties: Penalties,
}

/// Raw data for one row, used by [`ScoreSheet::from_parts`].
#[derive(Debug, Clone, Copy)]
pub struct RowParts<'a> {
    /// Crossed values, in any order.
    pub crossed: &'a [u8],
    /// Whether the row is locked.
    pub locked: bool,
}

impl Default for ScoreSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSheet {
    /// Creates a fresh sheet: all rows empty and unlocked, no penalties.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: [
                RowState::new(Row::Red),
                RowState::new(Row::Yellow),
                RowState::new(Row::Green),
                RowState::new(Row::Blue),
            ],
            penalties: Penalties::new(),
        }
    }

    /// Rebuilds a sheet from raw parts, with rows in [`Row::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns a [`SheetError`] if any row holds an invalid number, a
    /// duplicate, or a lock that the row's crosses do not justify.
    pub fn from_parts(
        rows: [RowParts<'_>; 4],
        penalties: [bool; PENALTY_COUNT],
    ) -> Result<Self, SheetError> {
        let [red, yellow, green, blue] = rows;
        Ok(Self {
            rows: [
                RowState::from_parts(Row::Red, red.crossed, red.locked)?,
                RowState::from_parts(Row::Yellow, yellow.crossed, yellow.locked)?,
                RowState::from_parts(Row::Green, green.crossed, green.locked)?,
                RowState::from_parts(Row::Blue, blue.crossed, blue.locked)?,
            ],
            penalties: Penalties::from_flags(penalties),
        })
    }

    /// Returns the state of `row`.
    #[must_use]
    pub const fn row(&self, row: Row) -> &RowState {
        &self.rows[row.index()]
    }

    fn row_mut(&mut self, row: Row) -> &mut RowState {
        &mut self.rows[row.index()]
    }

    /// Returns all rows in [`Row::ALL`] order.
    #[must_use]
    pub const fn rows(&self) -> &[RowState; 4] {
        &self.rows
    }

    /// Returns the penalty track.
    #[must_use]
    pub const fn penalties(&self) -> &Penalties {
        &self.penalties
    }

    /// Returns `true` if nothing has been marked on the sheet.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::new()
    }

    /// Returns `true` if `number` satisfies the left-to-right rule on `row`.
    ///
    /// See [`RowState::is_valid_cross`].
    #[must_use]
    pub fn is_valid_cross(&self, row: Row, number: Number) -> bool {
        self.row(row).is_valid_cross(number)
    }

    /// Returns whether `number` can be crossed on `row`, or why it cannot.
    ///
    /// # Errors
    ///
    /// See [`RowState::cross_capability`].
    pub fn cross_capability(&self, row: Row, number: Number) -> Result<(), GameError> {
        self.row(row).cross_capability(number)
    }

    /// Crosses `number` on `row`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RowLocked`], [`GameError::AlreadyCrossed`], or
    /// [`GameError::OutOfOrder`]; the sheet is unchanged.
    pub fn cross_number(&mut self, row: Row, number: Number) -> Result<(), GameError> {
        self.row_mut(row).cross(number)
    }

    /// Returns what toggling the lock on `row` would do.
    ///
    /// # Errors
    ///
    /// See [`RowState::lock_capability`].
    pub fn lock_capability(&self, row: Row) -> Result<LockOperation, GameError> {
        self.row(row).lock_capability()
    }

    /// Locks or unlocks `row`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotEnoughCrosses`] or
    /// [`GameError::ExtremeNotCrossed`] when locking is not allowed; the sheet
    /// is unchanged.
    pub fn toggle_lock(&mut self, row: Row) -> Result<LockOperation, GameError> {
        self.row_mut(row).toggle_lock()
    }

    /// Flips penalty `index` and returns its new state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PenaltyOutOfRange`] for an index of 4 or more.
    pub fn toggle_penalty(&mut self, index: usize) -> Result<bool, GameError> {
        self.penalties.toggle(index)
    }

    /// Computes the current scores.
    #[must_use]
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.rows.each_ref().map(RowState::total), self.penalties.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: u8) -> Number {
        Number::new(value).unwrap()
    }

    fn empty_parts() -> [RowParts<'static>; 4] {
        [RowParts {
            crossed: &[],
            locked: false,
        }; 4]
    }

    #[test]
    fn new_sheet_is_blank() {
        let sheet = ScoreSheet::new();
        assert!(sheet.is_blank());
        for row in Row::ALL {
            assert_eq!(sheet.row(row).row(), row);
            assert_eq!(sheet.row(row).cross_count(), 0);
            assert!(!sheet.row(row).is_locked());
        }
        assert_eq!(sheet.penalties().active_count(), 0);
        assert_eq!(sheet.summary(), ScoreSummary::new([0; 4], 0));
    }

    #[test]
    fn rows_are_independent() {
        let mut sheet = ScoreSheet::new();
        sheet.cross_number(Row::Red, n(10)).unwrap();
        assert!(sheet.is_valid_cross(Row::Yellow, n(2)));
        sheet.cross_number(Row::Yellow, n(2)).unwrap();
        assert!(!sheet.is_valid_cross(Row::Red, n(2)));
        assert!(sheet.cross_number(Row::Red, n(2)).unwrap_err().is_out_of_order());
    }

    #[test]
    fn failed_operations_leave_sheet_untouched() {
        let mut sheet = ScoreSheet::new();
        sheet.cross_number(Row::Blue, n(6)).unwrap();
        let before = sheet.clone();

        assert!(sheet.cross_number(Row::Blue, n(7)).is_err());
        assert!(sheet.cross_number(Row::Blue, n(6)).is_err());
        assert!(sheet.toggle_lock(Row::Blue).is_err());
        assert!(sheet.toggle_penalty(9).is_err());
        assert_eq!(sheet, before);
    }

    #[test]
    fn summary_adds_rows_and_penalties() {
        let mut sheet = ScoreSheet::new();
        for value in [2, 4, 6, 8, 12] {
            sheet.cross_number(Row::Red, n(value)).unwrap();
        }
        sheet.toggle_lock(Row::Red).unwrap();
        for value in [10, 6] {
            sheet.cross_number(Row::Green, n(value)).unwrap();
        }
        sheet.toggle_penalty(1).unwrap();
        sheet.toggle_penalty(3).unwrap();

        let summary = sheet.summary();
        assert_eq!(summary.row_totals, [16, 0, 3, 0]);
        assert_eq!(summary.row_total(Row::Red), 16);
        assert_eq!(summary.total, 19);
        assert_eq!(summary.penalty_score, -10);
        assert_eq!(summary.grand_total, 9);
    }

    #[test]
    fn from_parts_roundtrip() {
        let mut sheet = ScoreSheet::new();
        for value in [12, 9, 4, 3, 2] {
            sheet.cross_number(Row::Blue, n(value)).unwrap();
        }
        sheet.toggle_lock(Row::Blue).unwrap();
        sheet.cross_number(Row::Yellow, n(7)).unwrap();
        sheet.toggle_penalty(2).unwrap();

        let mut parts = empty_parts();
        parts[Row::Yellow.index()] = RowParts {
            crossed: &[7],
            locked: false,
        };
        parts[Row::Blue.index()] = RowParts {
            crossed: &[2, 3, 4, 9, 12],
            locked: true,
        };
        let rebuilt = ScoreSheet::from_parts(parts, [false, false, true, false]).unwrap();
        assert_eq!(rebuilt, sheet);
    }

    #[test]
    fn from_parts_rejects_bad_rows() {
        let mut parts = empty_parts();
        parts[Row::Red.index()] = RowParts {
            crossed: &[13],
            locked: false,
        };
        assert_eq!(
            ScoreSheet::from_parts(parts, [false; 4]),
            Err(SheetError::InvalidNumber {
                row: Row::Red,
                value: 13
            })
        );

        let mut parts = empty_parts();
        parts[Row::Yellow.index()] = RowParts {
            crossed: &[2, 3],
            locked: true,
        };
        assert_eq!(
            ScoreSheet::from_parts(parts, [false; 4]),
            Err(SheetError::IneligibleLock { row: Row::Yellow })
        );
    }
}
