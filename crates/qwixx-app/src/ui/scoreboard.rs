use eframe::egui::{Grid, RichText, Ui};
use qwixx_core::Row;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScoreboardViewModel {
    pub(crate) row_totals: [(Row, u32); 4],
    pub(crate) penalty_score: i32,
    pub(crate) grand_total: i32,
}

pub(crate) fn show(ui: &mut Ui, vm: &ScoreboardViewModel) {
    Grid::new("scoreboard")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for (row, total) in vm.row_totals {
                let palette = theme::row_palette(row);
                ui.label(RichText::new(capitalized(row)).color(palette.fill).strong());
                ui.label(total.to_string());
                ui.end_row();
            }
            ui.label("Penalties");
            ui.label(vm.penalty_score.to_string());
            ui.end_row();

            ui.label(RichText::new("Total").strong());
            ui.label(RichText::new(vm.grand_total.to_string()).strong().size(20.0));
            ui.end_row();
        });
}

fn capitalized(row: Row) -> String {
    let name = row.to_string();
    let mut chars = name.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
