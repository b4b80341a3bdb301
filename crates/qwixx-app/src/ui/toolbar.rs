use eframe::egui::{Button, Ui};

use crate::action::{Action, ActionRequestQueue, handler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ToolbarViewModel {
    pub(crate) can_undo: bool,
}

impl ToolbarViewModel {
    #[must_use]
    pub(crate) fn new(can_undo: bool) -> Self {
        Self { can_undo }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &ToolbarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        let undo = ui
            .add_enabled(vm.can_undo, Button::new("⟲ Undo"))
            .on_hover_text("Undo (Ctrl+Z)");
        if undo.clicked() {
            action_queue.request(Action::Undo);
        }

        let new_game = ui.button("New Game").on_hover_text("New game (Ctrl+N)");
        if new_game.clicked() {
            handler::request_new_game(action_queue);
        }
    });
}
