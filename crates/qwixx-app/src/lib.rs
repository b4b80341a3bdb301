//! Qwixx scorekeeper desktop application.
//!
//! # Design Notes
//! - One score sheet: four colored rows, four penalty boxes, live totals.
//! - Rules are enforced by `qwixx-game`; this crate turns clicks and
//!   shortcuts into actions and rejected actions into short notices.
//! - The sheet and its undo history are saved through eframe storage after
//!   every change and restored at startup.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub const DEFAULT_MAX_HISTORY_LENGTH: usize = 10;
pub const STORAGE_KEY: &str = "qwixx-state";

pub use self::app::QwixxApp;

mod action;
pub mod app;
pub mod persistence;
mod state;
mod ui;
mod undo_stack;
pub mod version;
mod view_model_builder;
