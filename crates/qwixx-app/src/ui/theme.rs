use eframe::egui::{Color32, Visuals};
use qwixx_core::Row;

/// Colors for one row of the sheet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RowPalette {
    pub(crate) fill: Color32,
    pub(crate) text: Color32,
    pub(crate) muted_fill: Color32,
}

impl RowPalette {
    fn new(fill: Color32, text: Color32) -> Self {
        Self {
            fill,
            text,
            muted_fill: fill.gamma_multiply(0.35),
        }
    }
}

#[must_use]
pub(crate) fn row_palette(row: Row) -> RowPalette {
    match row {
        Row::Red => RowPalette::new(Color32::from_rgb(0xd3, 0x2f, 0x2f), Color32::WHITE),
        Row::Yellow => RowPalette::new(Color32::from_rgb(0xf9, 0xc7, 0x1c), Color32::BLACK),
        Row::Green => RowPalette::new(Color32::from_rgb(0x38, 0x8e, 0x3c), Color32::WHITE),
        Row::Blue => RowPalette::new(Color32::from_rgb(0x19, 0x76, 0xd2), Color32::WHITE),
    }
}

/// Color of the cross drawn over a crossed number.
#[must_use]
pub(crate) fn cross_color(visuals: &Visuals) -> Color32 {
    if visuals.dark_mode {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}
