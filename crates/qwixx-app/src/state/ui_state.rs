use qwixx_game::GameError;

use crate::{action::ModalRequest, state::NothingToUndo};

/// A non-fatal message for the player, shown until the next successful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum Notice {
    #[display("{_0}")]
    Rejected(GameError),
    #[display("{_0}")]
    NothingToUndo(NothingToUndo),
    #[display("The saved game could not be restored, so a new game was started")]
    RestoreFailed,
}

impl Notice {
    /// Returns the notice for a rejected operation, or `None` for rejections
    /// that are not worth a message (clicking a crossed number or a locked row).
    #[must_use]
    pub(crate) fn for_rejection(err: GameError) -> Option<Self> {
        match err {
            GameError::RowLocked { .. } | GameError::AlreadyCrossed { .. } => None,
            GameError::OutOfOrder { .. }
            | GameError::NotEnoughCrosses { .. }
            | GameError::ExtremeNotCrossed { .. }
            | GameError::PenaltyOutOfRange { .. } => Some(Self::Rejected(err)),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalRequest>,
    pub(crate) notice: Option<Notice>,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(crate) fn with_notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use qwixx_core::{Number, Row};
    use qwixx_game::GameError;

    use super::Notice;
    use crate::state::NothingToUndo;

    #[test]
    fn silent_rejections_have_no_notice() {
        let number = Number::new(7).unwrap();
        assert_eq!(
            Notice::for_rejection(GameError::RowLocked { row: Row::Red }),
            None
        );
        assert_eq!(
            Notice::for_rejection(GameError::AlreadyCrossed { number }),
            None
        );
    }

    #[test]
    fn notices_use_player_facing_text() {
        let notice = Notice::for_rejection(GameError::OutOfOrder {
            number: Number::new(3).unwrap(),
            frontier: Number::new(8).unwrap(),
        })
        .unwrap();
        assert_eq!(notice.to_string(), "Numbers must be crossed left to right");

        let notice = Notice::for_rejection(GameError::NotEnoughCrosses { crossed: 2 }).unwrap();
        assert_eq!(notice.to_string(), "Need 5+ crosses to lock");

        assert_eq!(
            Notice::NothingToUndo(NothingToUndo).to_string(),
            "Nothing to undo"
        );
    }
}
