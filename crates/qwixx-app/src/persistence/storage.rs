use eframe::Storage;
use qwixx_game::{ScoreSheet, SheetError};

use crate::{
    STORAGE_KEY,
    persistence::dto::{PersistedStateDto, ScoreSheetDto},
    state::{AppState, History},
};

/// Why a stored game could not be restored.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The stored text is not a valid record.
    #[display("saved state is unreadable")]
    Unreadable,
    /// The record parsed but the current sheet breaks the game rules.
    #[display("saved sheet is invalid: {_0}")]
    Invalid(SheetError),
}

/// Loads the saved game.
///
/// Returns `Ok(None)` when nothing has been saved yet. History entries that
/// fail validation are dropped; an invalid current sheet is an error.
pub(crate) fn load_state(storage: &dyn Storage) -> Result<Option<AppState>, LoadError> {
    if storage.get_string(STORAGE_KEY).is_none() {
        return Ok(None);
    }
    let dto: PersistedStateDto =
        eframe::get_value(storage, STORAGE_KEY).ok_or(LoadError::Unreadable)?;

    let sheet = ScoreSheet::try_from(&dto.sheet).map_err(LoadError::Invalid)?;
    let entries = dto
        .history
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| match ScoreSheet::try_from(entry) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log::warn!("dropping history entry {i}: {err}");
                None
            }
        })
        .collect();
    let history = History::from_entries(History::default_capacity(), entries);

    log::debug!(
        "restored saved game with {}/{} undo snapshots",
        history.len(),
        history.capacity()
    );
    Ok(Some(AppState::from_parts(sheet, history)))
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    let dto = PersistedStateDto {
        sheet: ScoreSheetDto::from(app_state.sheet()),
        history: app_state
            .history()
            .entries()
            .map(ScoreSheetDto::from)
            .collect(),
    };
    eframe::set_value(storage, STORAGE_KEY, &dto);
}
