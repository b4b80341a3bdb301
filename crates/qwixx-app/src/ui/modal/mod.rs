use eframe::egui::Context;

use crate::action::{ActionRequestQueue, ModalRequest};

mod dialogs;

pub(crate) fn show(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    modal_request: ModalRequest,
) {
    match modal_request {
        ModalRequest::Confirm(kind) => dialogs::show_confirm(ctx, action_queue, kind),
    }
}
