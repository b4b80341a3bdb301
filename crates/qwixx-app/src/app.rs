use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, ActionRequestQueue},
    persistence::storage,
    state::{AppState, Notice, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct QwixxApp {
    app_state: AppState,
    ui_state: UiState,
}

impl QwixxApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let (app_state, ui_state) = match cc.storage.map(storage::load_state) {
            Some(Ok(Some(app_state))) => (app_state, UiState::new()),
            Some(Ok(None)) | None => (AppState::new(), UiState::new()),
            Some(Err(err)) => {
                log::warn!("starting a new game: {err}");
                (AppState::new(), UiState::with_notice(Notice::RestoreFailed))
            }
        };
        Self {
            app_state,
            ui_state,
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            storage.flush();
            self.app_state.clear_dirty();
        }
    }
}

impl App for QwixxApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        storage::save_state(storage, &self.app_state);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if self.ui_state.active_modal.is_none() {
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
            });
            action::handler::handle_all(
                &mut self.app_state,
                &mut self.ui_state,
                &mut action_queue,
            );
        }

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state);

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
        });

        if let Some(modal_request) = self.ui_state.active_modal {
            ui::modal::show(ctx, &mut action_queue, modal_request);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.apply_persistence(frame);
    }
}
