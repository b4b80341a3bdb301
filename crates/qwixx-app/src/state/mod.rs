pub(crate) use self::{app_state::*, history::*, ui_state::*};

mod app_state;
mod history;
mod ui_state;
