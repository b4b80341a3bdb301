use eframe::egui::{Button, Label, Rect, RichText, Stroke, Ui, Vec2, Widget as _};
use qwixx_core::{Number, Row};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::theme::{self, RowPalette},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct CellVisualState: u8 {
        const CROSSED = 0b0000_0001;
        const SKIPPED = 0b0000_0010;
        const LOCKED = 0b0000_0100;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SheetCell {
    pub(crate) number: Number,
    pub(crate) visual_state: CellVisualState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LockButtonState {
    pub(crate) locked: bool,
    /// Whether pressing the button would lock or unlock the row right now.
    pub(crate) can_toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowViewModel {
    pub(crate) row: Row,
    /// Cells in the row's direction.
    pub(crate) cells: Vec<SheetCell>,
    pub(crate) lock: LockButtonState,
    pub(crate) total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SheetViewModel {
    rows: [RowViewModel; 4],
}

impl SheetViewModel {
    #[must_use]
    pub(crate) fn new(rows: [RowViewModel; 4]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub(crate) fn row(&self, row: Row) -> &RowViewModel {
        &self.rows[row.index()]
    }
}

const CELL_SIZE: f32 = 44.0;

pub(crate) fn show(ui: &mut Ui, vm: &SheetViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        for row in Row::ALL {
            show_row(ui, vm.row(row), action_queue);
        }
    });
}

fn show_row(ui: &mut Ui, vm: &RowViewModel, action_queue: &mut ActionRequestQueue) {
    let palette = theme::row_palette(vm.row);
    ui.horizontal(|ui| {
        for cell in &vm.cells {
            if show_cell(ui, cell, &palette) {
                action_queue.request(Action::CrossNumber {
                    row: vm.row,
                    number: cell.number,
                });
            }
        }
        if show_lock(ui, vm.lock, &palette) {
            action_queue.request(Action::ToggleLock(vm.row));
        }
        ui.add_space(8.0);
        Label::new(RichText::new(vm.total.to_string()).size(CELL_SIZE * 0.45).strong())
            .ui(ui)
            .on_hover_text(format!("{} row total", vm.row));
    });
}

fn show_cell(ui: &mut Ui, cell: &SheetCell, palette: &RowPalette) -> bool {
    let vs = cell.visual_state;
    let dimmed = vs.intersects(CellVisualState::SKIPPED | CellVisualState::LOCKED)
        && !vs.contains(CellVisualState::CROSSED);
    let fill = if dimmed {
        palette.muted_fill
    } else {
        palette.fill
    };

    let text = RichText::new(cell.number.to_string())
        .size(CELL_SIZE * 0.45)
        .color(palette.text);
    let response = Button::new(text)
        .fill(fill)
        .min_size(Vec2::splat(CELL_SIZE))
        .ui(ui);

    if vs.contains(CellVisualState::CROSSED) {
        paint_cross(ui, response.rect);
    }
    response.clicked()
}

fn paint_cross(ui: &Ui, rect: Rect) {
    let rect = rect.shrink(CELL_SIZE * 0.15);
    let stroke = Stroke::new(3.0, theme::cross_color(ui.visuals()));
    let painter = ui.painter();
    painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
    painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
}

fn show_lock(ui: &mut Ui, lock: LockButtonState, palette: &RowPalette) -> bool {
    let (label, hover) = if lock.locked {
        ("🔒", "Unlock row")
    } else {
        ("🔓", "Lock row (5+ crosses and the last number)")
    };
    let fill = if lock.locked || lock.can_toggle {
        palette.fill
    } else {
        palette.muted_fill
    };
    Button::new(RichText::new(label).size(CELL_SIZE * 0.45))
        .fill(fill)
        .selected(lock.locked)
        .min_size(Vec2::splat(CELL_SIZE))
        .ui(ui)
        .on_hover_text(hover)
        .clicked()
}
