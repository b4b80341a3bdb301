use qwixx_core::{Number, Row};
use qwixx_game::GameError;

use crate::{
    action::{Action, ActionRequestQueue, ConfirmKind, ModalRequest},
    state::{AppState, Notice, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::CrossNumber { row, number } => cross_number(app_state, ui_state, row, number),
        Action::ToggleLock(row) => match app_state.toggle_lock(row) {
            Ok(operation) => {
                log::debug!("{operation:?} {row} row");
                ui_state.notice = None;
            }
            Err(err) => reject(ui_state, err),
        },
        Action::TogglePenalty(index) => match app_state.toggle_penalty(index) {
            Ok(active) => {
                log::debug!("penalty {index} set to {active}");
                ui_state.notice = None;
            }
            Err(err) => reject(ui_state, err),
        },
        Action::Undo => match app_state.undo_last() {
            Ok(()) => {
                log::debug!("undo, {} snapshots left", app_state.history().len());
                ui_state.notice = None;
            }
            Err(err) => {
                log::debug!("undo rejected: {err}");
                ui_state.notice = Some(Notice::NothingToUndo(err));
            }
        },
        Action::StartNewGame => {
            log::info!("starting a new game");
            app_state.new_game();
            ui_state.active_modal = None;
            ui_state.notice = None;
        }
        Action::OpenModal(modal_request) => {
            ui_state.active_modal = Some(modal_request);
        }
        Action::CloseModal => {
            ui_state.active_modal = None;
        }
        Action::DismissNotice => {
            ui_state.notice = None;
        }
    }
}

/// Opens the new game confirmation, which dispatches [`Action::StartNewGame`]
/// when accepted.
pub(crate) fn request_new_game(action_queue: &mut ActionRequestQueue) {
    action_queue.request(Action::OpenModal(ModalRequest::Confirm(ConfirmKind::NewGame)));
}

fn cross_number(app_state: &mut AppState, ui_state: &mut UiState, row: Row, number: Number) {
    match app_state.cross_number(row, number) {
        Ok(()) => {
            log::debug!("crossed {number} on {row} row");
            ui_state.notice = None;
        }
        Err(err) => reject(ui_state, err),
    }
}

fn reject(ui_state: &mut UiState, err: GameError) {
    log::debug!("rejected: {err}");
    if let Some(notice) = Notice::for_rejection(err) {
        ui_state.notice = Some(notice);
    }
}
