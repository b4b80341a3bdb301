use eframe::egui::Ui;

use crate::{
    action::ActionRequestQueue,
    ui::{
        penalties::{self, PenaltiesViewModel},
        scoreboard::{self, ScoreboardViewModel},
        sheet::{self, SheetViewModel},
        status_line::{self, StatusLineViewModel},
        toolbar::{self, ToolbarViewModel},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) toolbar_vm: ToolbarViewModel,
    pub(crate) sheet_vm: SheetViewModel,
    pub(crate) penalties_vm: PenaltiesViewModel,
    pub(crate) scoreboard_vm: ScoreboardViewModel,
    pub(crate) status_line_vm: StatusLineViewModel,
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    toolbar::show(ui, &vm.toolbar_vm, action_queue);
    ui.separator();

    sheet::show(ui, &vm.sheet_vm, action_queue);
    ui.add_space(8.0);
    penalties::show(ui, &vm.penalties_vm, action_queue);
    ui.separator();

    scoreboard::show(ui, &vm.scoreboard_vm);
    ui.separator();

    status_line::show(ui, &vm.status_line_vm, action_queue);
}
