//! Validation errors raised before any catch computation runs.

use thiserror::Error;

/// Errors returned by the catch engine.
///
/// Every variant is a precondition failure detected at the call boundary.
/// Nothing is ever clamped into range on the caller's behalf.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatchError {
    /// Level outside 1-100.
    #[error("{0} is not a valid level (expected 1-100)")]
    InvalidLevel(u8),

    /// Catching power level with no entry in the modifier table.
    #[error("catching power level must be between 0 and 3 (got {0})")]
    InvalidCatchingPower(u8),

    /// Current HP of zero or above the target's max HP.
    #[error("current HP {current} is outside 1-{max}")]
    InvalidCurrentHp { current: u16, max: u16 },

    /// Base HP too large for the level-100 max HP to fit in 16 bits.
    #[error("base HP {0} is out of range (expected at most 32697)")]
    BaseHpOutOfRange(u16),

    /// A profile needs one or two types.
    #[error("a profile needs one or two types (got {0})")]
    InvalidTypeCount(usize),

    #[error("{0} is not a recognized Pokémon type")]
    UnknownType(String),

    #[error("{0} is not a recognized Poké Ball")]
    UnknownBall(String),

    #[error("{0} is not a recognized status condition")]
    UnknownStatus(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatchError>;
