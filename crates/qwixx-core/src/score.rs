//! Scoring rules.
//!
//! Each crossed number on a row is worth one point more than the previous one,
//! so a row with `n` crosses scores the `n`-th triangular number. A locked row
//! earns one extra point and every active penalty costs five.

/// Number of penalty boxes on a sheet.
pub const PENALTY_COUNT: usize = 4;

/// Points for a single active penalty.
pub const PENALTY_POINTS: i32 = -5;

/// Bonus points for a locked row.
pub const LOCK_BONUS: u32 = 1;

/// Crosses required on a row before it can be locked.
pub const MIN_CROSSES_TO_LOCK: usize = 5;

/// Returns the score of a row with `crossed` crosses: `n * (n + 1) / 2`.
///
/// # Examples
///
/// ```
/// use qwixx_core::score::row_score;
///
/// assert_eq!(row_score(0), 0);
/// assert_eq!(row_score(1), 1);
/// assert_eq!(row_score(5), 15);
/// assert_eq!(row_score(12), 78);
/// ```
#[must_use]
pub const fn row_score(crossed: usize) -> u32 {
    #[expect(clippy::cast_possible_truncation)]
    let n = crossed as u32;
    n * (n + 1) / 2
}

/// Returns the score of a row including the lock bonus.
#[must_use]
pub const fn row_total(crossed: usize, locked: bool) -> u32 {
    row_score(crossed) + if locked { LOCK_BONUS } else { 0 }
}

/// Returns the (non-positive) score for `active` penalties.
#[must_use]
pub const fn penalty_score(active: usize) -> i32 {
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let active = active as i32;
    active * PENALTY_POINTS
}
