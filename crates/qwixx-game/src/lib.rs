//! Qwixx score sheet rules.
//!
//! [`ScoreSheet`] owns four [`RowState`]s and the [`Penalties`] track and
//! enforces every rule of the sheet before applying a change:
//!
//! - numbers are crossed left to right in each row's [`Direction`],
//! - a number can be crossed at most once,
//! - a row is locked only with five or more crosses including its extreme
//!   number, and a locked row accepts no further crosses.
//!
//! Rejected operations leave the sheet untouched and report a [`GameError`]
//! whose `Display` text is suitable for showing to the player.
//!
//! Undo history and persistence are not handled here; a sheet is a plain value
//! that can be cloned to take a snapshot.
//!
//! [`Direction`]: qwixx_core::Direction

use qwixx_core::{Number, Row};

pub use self::{penalties::*, row_state::*, score_sheet::*, view::*};

mod penalties;
mod row_state;
mod score_sheet;
mod view;

/// Errors returned by score sheet operations.
///
/// Every variant is a correctable player mistake; the sheet is unchanged when
/// one is returned.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The row is locked and accepts no further crosses.
    #[display("The {row} row is locked")]
    RowLocked {
        /// The locked row.
        row: Row,
    },
    /// The number is already crossed on the row.
    #[display("{number} is already crossed")]
    AlreadyCrossed {
        /// The rejected number.
        number: Number,
    },
    /// The number lies to the left of the rightmost cross.
    #[display("Numbers must be crossed left to right")]
    OutOfOrder {
        /// The rejected number.
        number: Number,
        /// The rightmost number crossed so far.
        frontier: Number,
    },
    /// Locking needs more crosses on the row.
    #[display("Need 5+ crosses to lock")]
    NotEnoughCrosses {
        /// Crosses currently on the row.
        crossed: usize,
    },
    /// Locking needs the row's extreme number to be crossed.
    #[display("Must cross {extreme} to lock")]
    ExtremeNotCrossed {
        /// The number that must be crossed first.
        extreme: Number,
    },
    /// The penalty index does not name one of the penalty boxes.
    #[display("Penalty {index} does not exist")]
    PenaltyOutOfRange {
        /// The rejected index.
        index: usize,
    },
}

/// Errors returned when rebuilding a sheet from raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SheetError {
    /// A crossed value is outside 2 to 12.
    #[display("{row} row contains invalid number {value}")]
    InvalidNumber {
        /// The row containing the value.
        row: Row,
        /// The rejected value.
        value: u8,
    },
    /// A value appears more than once.
    #[display("{row} row contains {number} more than once")]
    DuplicateNumber {
        /// The row containing the value.
        row: Row,
        /// The repeated number.
        number: Number,
    },
    /// The row is marked locked but does not meet the lock conditions.
    #[display("{row} row is locked without meeting the lock conditions")]
    IneligibleLock {
        /// The offending row.
        row: Row,
    },
}

/// The effect a lock toggle has, or would have, on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum LockOperation {
    /// The row becomes locked.
    Lock,
    /// The row becomes unlocked.
    Unlock,
}
