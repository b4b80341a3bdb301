use qwixx_core::{Number, Row};
use qwixx_game::{GameError, LockOperation, ScoreSheet};

use crate::state::History;

// AppState holds persisted state (sheet + undo history). It is serialized for resume.
#[derive(Debug)]
pub(crate) struct AppState {
    sheet: ScoreSheet,
    history: History,
    dirty: bool,
}

/// Returned by [`AppState::undo_last`] when there is no snapshot to restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Nothing to undo")]
pub(crate) struct NothingToUndo;

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::from_parts(ScoreSheet::new(), History::new())
    }

    #[must_use]
    pub(crate) fn from_parts(sheet: ScoreSheet, history: History) -> Self {
        Self {
            sheet,
            history,
            dirty: false,
        }
    }

    #[must_use]
    pub(crate) fn sheet(&self) -> &ScoreSheet {
        &self.sheet
    }

    #[must_use]
    pub(crate) fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Runs `op` on the sheet, recording the previous sheet in the history if
    /// it succeeds.
    fn apply<T>(
        &mut self,
        op: impl FnOnce(&mut ScoreSheet) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let before = self.sheet.clone();
        let value = op(&mut self.sheet)?;
        self.history.push(before);
        self.dirty = true;
        Ok(value)
    }

    pub(crate) fn cross_number(&mut self, row: Row, number: Number) -> Result<(), GameError> {
        self.apply(|sheet| sheet.cross_number(row, number))
    }

    pub(crate) fn toggle_lock(&mut self, row: Row) -> Result<LockOperation, GameError> {
        self.apply(|sheet| sheet.toggle_lock(row))
    }

    pub(crate) fn toggle_penalty(&mut self, index: usize) -> Result<bool, GameError> {
        self.apply(|sheet| sheet.toggle_penalty(index))
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Replaces the sheet with the most recent snapshot.
    pub(crate) fn undo_last(&mut self) -> Result<(), NothingToUndo> {
        let snapshot = self.history.pop().ok_or(NothingToUndo)?;
        self.sheet = snapshot;
        self.dirty = true;
        Ok(())
    }

    /// Starts over with a blank sheet and an empty history.
    pub(crate) fn new_game(&mut self) {
        self.sheet = ScoreSheet::new();
        self.history.clear();
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use qwixx_core::{Number, Row};
    use qwixx_game::{GameError, LockOperation, ScoreSheet};

    use super::{AppState, NothingToUndo};

    fn n(value: u8) -> Number {
        Number::new(value).unwrap()
    }

    #[test]
    fn successful_operations_push_history() {
        let mut state = AppState::new();
        state.cross_number(Row::Red, n(5)).unwrap();
        state.toggle_penalty(0).unwrap();

        assert_eq!(state.history().len(), 2);
        assert!(state.is_dirty());
    }

    #[test]
    fn rejected_operations_do_not_touch_history() {
        let mut state = AppState::new();
        state.cross_number(Row::Green, n(10)).unwrap();
        state.clear_dirty();
        let before = state.sheet().clone();

        assert_eq!(
            state.cross_number(Row::Green, n(10)),
            Err(GameError::AlreadyCrossed { number: n(10) })
        );
        assert!(state.cross_number(Row::Green, n(12)).is_err());
        assert!(state.toggle_lock(Row::Green).is_err());
        assert!(state.toggle_penalty(4).is_err());

        assert_eq!(state.sheet(), &before);
        assert_eq!(state.history().len(), 1);
        assert!(!state.is_dirty());
    }

    #[test]
    fn undo_restores_previous_sheet() {
        let mut state = AppState::new();
        state.cross_number(Row::Yellow, n(3)).unwrap();
        let after_first = state.sheet().clone();
        state.cross_number(Row::Yellow, n(9)).unwrap();

        assert_eq!(state.undo_last(), Ok(()));
        assert_eq!(state.sheet(), &after_first);
        assert_eq!(state.undo_last(), Ok(()));
        assert!(state.sheet().is_blank());
        assert_eq!(state.undo_last(), Err(NothingToUndo));
        assert!(state.sheet().is_blank());
        assert_eq!(NothingToUndo.to_string(), "Nothing to undo");
    }

    #[test]
    fn undo_reverts_lock_and_penalty() {
        let mut state = AppState::new();
        for value in [2, 5, 8, 10, 12] {
            state.cross_number(Row::Red, n(value)).unwrap();
        }
        assert_eq!(state.toggle_lock(Row::Red), Ok(LockOperation::Lock));
        assert_eq!(state.toggle_penalty(3), Ok(true));

        state.undo_last().unwrap();
        assert_eq!(state.sheet().penalties().get(3), Some(false));
        assert!(state.sheet().row(Row::Red).is_locked());

        state.undo_last().unwrap();
        assert!(!state.sheet().row(Row::Red).is_locked());
        assert_eq!(state.sheet().row(Row::Red).cross_count(), 5);
    }

    #[test]
    fn undo_depth_is_capped() {
        let mut state = AppState::new();
        for value in 2..=12 {
            state.cross_number(Row::Red, n(value)).unwrap();
        }
        let mut undone = 0;
        while state.undo_last().is_ok() {
            undone += 1;
        }

        assert_eq!(undone, 10);
        // The first cross is older than every remaining snapshot.
        let mut expected = ScoreSheet::new();
        expected.cross_number(Row::Red, n(2)).unwrap();
        assert_eq!(state.sheet(), &expected);
    }

    #[test]
    fn new_game_clears_everything() {
        let mut state = AppState::new();
        state.cross_number(Row::Blue, n(4)).unwrap();
        state.toggle_penalty(1).unwrap();
        state.clear_dirty();

        state.new_game();

        assert!(state.sheet().is_blank());
        assert!(!state.can_undo());
        assert!(state.is_dirty());
    }
}
