pub(crate) mod game_screen;
pub(crate) mod input;
pub(crate) mod modal;
pub(crate) mod penalties;
pub(crate) mod scoreboard;
pub(crate) mod sheet;
pub(crate) mod status_line;
pub(crate) mod theme;
pub(crate) mod toolbar;
