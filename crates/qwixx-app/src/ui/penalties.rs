use eframe::egui::{Button, RichText, Ui, Vec2, Widget as _};
use qwixx_core::score::{PENALTY_COUNT, PENALTY_POINTS};

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PenaltiesViewModel {
    pub(crate) flags: [bool; PENALTY_COUNT],
}

impl PenaltiesViewModel {
    #[must_use]
    pub(crate) fn new(flags: [bool; PENALTY_COUNT]) -> Self {
        Self { flags }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &PenaltiesViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        ui.label("Penalties");
        for (index, &active) in vm.flags.iter().enumerate() {
            let text = if active {
                RichText::new(PENALTY_POINTS.to_string()).strong()
            } else {
                RichText::new(" ")
            };
            let clicked = Button::new(text)
                .selected(active)
                .min_size(Vec2::splat(32.0))
                .ui(ui)
                .on_hover_text(format!("Penalty {}", index + 1))
                .clicked();
            if clicked {
                action_queue.request(Action::TogglePenalty(index));
            }
        }
    });
}
