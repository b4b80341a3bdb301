use std::mem;

use qwixx_core::{Number, Row};

pub(crate) mod handler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    CrossNumber { row: Row, number: Number },
    ToggleLock(Row),
    TogglePenalty(usize),
    Undo,
    StartNewGame,
    OpenModal(ModalRequest),
    CloseModal,
    DismissNotice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmKind {
    NewGame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalRequest {
    Confirm(ConfirmKind),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
