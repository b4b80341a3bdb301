use eframe::egui::{Label, RichText, Ui, Widget as _};

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    notice: Option<String>,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(notice: Option<String>) -> Self {
        Self { notice }
    }

    #[must_use]
    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        let Some(notice) = vm.notice() else {
            ui.label("");
            return;
        };
        Label::new(RichText::new(notice).color(ui.visuals().warn_fg_color)).ui(ui);
        if ui.small_button("✖").on_hover_text("Dismiss (Esc)").clicked() {
            action_queue.request(Action::DismissNotice);
        }
    });
}
