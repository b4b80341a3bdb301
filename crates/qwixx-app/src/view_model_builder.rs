use qwixx_core::Row;
use qwixx_game::{RowView, SheetView};

use crate::{
    state::{AppState, UiState},
    ui::{
        game_screen::GameScreenViewModel,
        penalties::PenaltiesViewModel,
        scoreboard::ScoreboardViewModel,
        sheet::{CellVisualState, LockButtonState, RowViewModel, SheetCell, SheetViewModel},
        status_line::StatusLineViewModel,
        toolbar::ToolbarViewModel,
    },
};

fn build_row(view: &RowView) -> RowViewModel {
    let cells = view
        .row
        .direction()
        .numbers()
        .map(|number| {
            let mut visual_state = CellVisualState::empty();
            if view.crossed.contains(number) {
                visual_state |= CellVisualState::CROSSED;
            }
            if view.skipped.contains(number) {
                visual_state |= CellVisualState::SKIPPED;
            }
            if view.locked {
                visual_state |= CellVisualState::LOCKED;
            }
            SheetCell {
                number,
                visual_state,
            }
        })
        .collect();

    RowViewModel {
        row: view.row,
        cells,
        lock: LockButtonState {
            locked: view.locked,
            can_toggle: view.lock.is_ok(),
        },
        total: view.total,
    }
}

fn build_scoreboard(view: &SheetView) -> ScoreboardViewModel {
    ScoreboardViewModel {
        row_totals: Row::ALL.map(|row| (row, view.summary.row_total(row))),
        penalty_score: view.summary.penalty_score,
        grand_total: view.summary.grand_total,
    }
}

#[must_use]
pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> GameScreenViewModel {
    let view = app_state.sheet().view();
    GameScreenViewModel {
        toolbar_vm: ToolbarViewModel::new(app_state.can_undo()),
        sheet_vm: SheetViewModel::new(view.rows.each_ref().map(build_row)),
        penalties_vm: PenaltiesViewModel::new(view.penalties),
        scoreboard_vm: build_scoreboard(&view),
        status_line_vm: StatusLineViewModel::new(
            ui_state.notice.map(|notice| notice.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use qwixx_core::{Number, Row};

    use super::build_game_screen_view_model;
    use crate::{
        state::{AppState, Notice, UiState},
        ui::sheet::CellVisualState,
    };

    fn n(value: u8) -> Number {
        Number::new(value).unwrap()
    }

    #[test]
    fn cells_follow_row_direction() {
        let vm = build_game_screen_view_model(&AppState::new(), &UiState::new());

        let numbers = |row: Row| -> Vec<u8> {
            vm.sheet_vm
                .row(row)
                .cells
                .iter()
                .map(|cell| cell.number.get())
                .collect()
        };
        let red = numbers(Row::Red);
        let green = numbers(Row::Green);
        assert_eq!(red, (2..=12).collect::<Vec<u8>>());
        assert_eq!(green, (2..=12).rev().collect::<Vec<u8>>());
        assert!(!vm.toolbar_vm.can_undo);
        assert_eq!(vm.status_line_vm.notice(), None);
    }

    #[test]
    fn crossed_and_skipped_cells_are_flagged() {
        let mut app_state = AppState::new();
        app_state.cross_number(Row::Blue, n(10)).unwrap();
        app_state.cross_number(Row::Blue, n(7)).unwrap();
        let vm = build_game_screen_view_model(&app_state, &UiState::new());

        let blue = vm.sheet_vm.row(Row::Blue);
        let state_of = |value: u8| {
            blue.cells
                .iter()
                .find(|cell| cell.number == n(value))
                .map(|cell| cell.visual_state)
                .unwrap()
        };
        assert_eq!(state_of(12), CellVisualState::SKIPPED);
        assert_eq!(state_of(10), CellVisualState::CROSSED);
        assert_eq!(state_of(8), CellVisualState::SKIPPED);
        assert_eq!(state_of(7), CellVisualState::CROSSED);
        assert_eq!(state_of(6), CellVisualState::empty());
        assert_eq!(blue.total, 3);
        assert!(vm.toolbar_vm.can_undo);
    }

    #[test]
    fn lock_state_and_totals_are_reported() {
        let mut app_state = AppState::new();
        for value in [2, 4, 6, 8, 10] {
            app_state.cross_number(Row::Red, n(value)).unwrap();
        }
        let vm = build_game_screen_view_model(&app_state, &UiState::new());
        assert!(!vm.sheet_vm.row(Row::Red).lock.can_toggle);

        app_state.cross_number(Row::Red, n(12)).unwrap();
        let vm = build_game_screen_view_model(&app_state, &UiState::new());
        assert!(vm.sheet_vm.row(Row::Red).lock.can_toggle);

        app_state.toggle_lock(Row::Red).unwrap();
        app_state.toggle_penalty(0).unwrap();
        let vm = build_game_screen_view_model(&app_state, &UiState::new());
        let red = vm.sheet_vm.row(Row::Red);
        assert!(red.lock.locked);
        assert!(red.lock.can_toggle);
        assert!(
            red.cells
                .iter()
                .all(|cell| cell.visual_state.contains(CellVisualState::LOCKED))
        );
        assert!(
            red.cells
                .iter()
                .all(|cell| !cell.visual_state.contains(CellVisualState::SKIPPED))
        );
        // 6 crosses = 21, plus the lock bonus.
        assert_eq!(red.total, 22);
        assert_eq!(vm.penalties_vm.flags, [true, false, false, false]);
        assert_eq!(vm.scoreboard_vm.penalty_score, -5);
        assert_eq!(vm.scoreboard_vm.grand_total, 17);
        assert_eq!(vm.scoreboard_vm.row_totals[0], (Row::Red, 22));
    }

    #[test]
    fn notice_is_rendered_as_text() {
        let ui_state = UiState::with_notice(Notice::RestoreFailed);
        let vm = build_game_screen_view_model(&AppState::new(), &ui_state);
        assert_eq!(
            vm.status_line_vm.notice(),
            Some("The saved game could not be restored, so a new game was started")
        );
    }
}
