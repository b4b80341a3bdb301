//! Core value types for the Qwixx score sheet.
//!
//! This crate holds the small vocabulary every other crate builds on:
//!
//! - [`Number`]: a value that can be crossed on a row (2 to 12).
//! - [`NumberSet`]: a compact set of numbers backed by a bitmask.
//! - [`Row`] and [`Direction`]: the four colored rows and the order in which
//!   each one must be filled.
//! - [`score`]: the scoring constants and the triangular row score.
//!
//! Nothing here owns game state; see the `qwixx-game` crate for the score sheet
//! itself.

pub use self::{number::*, number_set::*, row::*};

mod number;
mod number_set;
mod row;
pub mod score;
