use qwixx_core::{NumberSet, Row, score::PENALTY_COUNT};

use crate::{GameError, LockOperation, RowState, ScoreSheet};

/// Score totals for a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    /// Per-row totals (including lock bonuses) in [`Row::ALL`] order.
    pub row_totals: [u32; 4],
    /// Sum of the row totals.
    pub total: u32,
    /// Penalty deduction (zero or negative).
    pub penalty_score: i32,
    /// `total + penalty_score`.
    pub grand_total: i32,
}

impl ScoreSummary {
    /// Builds a summary from row totals and the penalty score.
    #[must_use]
    pub fn new(row_totals: [u32; 4], penalty_score: i32) -> Self {
        let total = row_totals.iter().sum::<u32>();
        // At most 4 * (78 + 1), well within i32.
        #[expect(clippy::cast_possible_wrap)]
        let grand_total = total as i32 + penalty_score;
        Self {
            row_totals,
            total,
            penalty_score,
            grand_total,
        }
    }

    /// Returns the total of a single row.
    #[must_use]
    pub const fn row_total(&self, row: Row) -> u32 {
        self.row_totals[row.index()]
    }
}

/// Read-only view of one row, with everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// The row being described.
    pub row: Row,
    /// Crossed numbers.
    pub crossed: NumberSet,
    /// Uncrossed numbers that can no longer be crossed.
    pub skipped: NumberSet,
    /// Whether the row is locked.
    pub locked: bool,
    /// Result of toggling the lock right now.
    pub lock: Result<LockOperation, GameError>,
    /// Row total including the lock bonus.
    pub total: u32,
}

impl From<&RowState> for RowView {
    fn from(state: &RowState) -> Self {
        Self {
            row: state.row(),
            crossed: state.crossed(),
            skipped: state.skipped(),
            locked: state.is_locked(),
            lock: state.lock_capability(),
            total: state.total(),
        }
    }
}

/// Read-only view of a whole sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetView {
    /// Rows in [`Row::ALL`] order.
    pub rows: [RowView; 4],
    /// Penalty flags.
    pub penalties: [bool; PENALTY_COUNT],
    /// Score totals.
    pub summary: ScoreSummary,
}

impl ScoreSheet {
    /// Returns a view of `row`.
    #[must_use]
    pub fn row_view(&self, row: Row) -> RowView {
        RowView::from(self.row(row))
    }

    /// Returns a view of the whole sheet.
    #[must_use]
    pub fn view(&self) -> SheetView {
        SheetView {
            rows: self.rows().each_ref().map(RowView::from),
            penalties: self.penalties().flags(),
            summary: self.summary(),
        }
    }
}
