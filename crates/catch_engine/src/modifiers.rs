//! Catch modifiers.
//!
//! Five modifiers depend only on the battle and save context and are
//! computed once per calculation (HP, dark grass, badge, status, Catching
//! Power). Two more are looked up per scenario: the species modifier (the
//! Heavy Ball adjusts the base catch rate by weight) and the critical catch
//! modifier.
//!
//! All values are 4096-scale. Badge and Catching Power modifiers are
//! fractional and stay `f64`: the formula multiplies by the unrounded value.

use crate::balls::BallId;
use crate::context::Status;
use crate::error::{CatchError, Result};
use crate::formula::MOD_SCALE;

// ============================================================================
// Lookup Tables
// ============================================================================

/// Level cap per number of badges: a target at or below `BADGE_LEVEL_CAPS[n]`
/// needs `n` badges to obey without penalty.
pub static BADGE_LEVEL_CAPS: [u8; 9] = [25, 30, 35, 40, 45, 50, 55, 60, 100];

/// Penalty factor per missing badge.
const MISSING_BADGE_FACTOR: f64 = 0.8;

/// Catching Power multipliers indexed by level.
pub static CATCHING_POWER_MULTIPLIERS: [f64; 4] = [1.0, 1.1, 1.25, 2.0];

/// Dark grass modifier by registered species: (min, max, modifier).
///
/// Not applied: [`dark_grass_modifier`] always returns 1.0x. Kept so the
/// brackets are documented next to the code that would use them.
pub static DARK_GRASS_BRACKETS: [(u16, u16, i64); 5] = [
    (0, 30, 1229),
    (31, 150, 2048),
    (151, 300, 2867),
    (301, 450, 3277),
    (451, 600, 3686),
];

/// Critical catch modifier by registered species: (min, max, modifier).
pub static CRITICAL_CATCH_BRACKETS: [(u16, u16, i64); 5] = [
    (0, 30, 0),
    (31, 150, 2048),
    (151, 300, 4096),
    (301, 450, 6144),
    (451, 600, 8192),
];

/// Critical catch modifier above the last bracket.
pub const CRITICAL_CATCH_DEFAULT: i64 = 10240;

/// Heavy Ball catch rate offset by weight in kg: (lower, upper, offset).
/// Lower bounds are exclusive, upper bounds inclusive.
pub static HEAVY_BALL_BRACKETS: [(f64, f64, i64); 3] = [
    (0.0, 99.9, -20),
    (100.0, 199.9, 0),
    (200.0, 299.9, 20),
];

/// Heavy Ball offset for any weight outside the brackets.
pub const HEAVY_BALL_DEFAULT_OFFSET: i64 = 30;

// ============================================================================
// Constant Modifiers
// ============================================================================

/// HP modifier: `(3 * MaxHP - 2 * CurrentHP) * 4096`.
#[inline]
pub fn hp_modifier(max_hp: u16, current_hp: u16) -> i64 {
    (3 * max_hp as i64 - 2 * current_hp as i64) * MOD_SCALE
}

/// Dark grass modifier. Always 1.0x.
///
/// The bracket table in [`DARK_GRASS_BRACKETS`] is not consulted.
#[inline]
pub fn dark_grass_modifier(_registered: u16) -> i64 {
    MOD_SCALE
}

/// Badge modifier: `0.8 ^ missing_badges * 4096`.
///
/// `missing_badges` is the badge count required for the target's level
/// bracket minus the badges earned, floored at zero. Levels beyond every
/// bracket get 1.0x.
pub fn badge_modifier(badges: u8, level: u8) -> f64 {
    match BADGE_LEVEL_CAPS.iter().position(|&cap| level <= cap) {
        Some(required) => {
            let missing = (required as i32 - badges as i32).max(0);
            MISSING_BADGE_FACTOR.powf(missing as f64) * MOD_SCALE as f64
        }
        None => MOD_SCALE as f64,
    }
}

/// Status modifier: 2.5x for sleep/freeze, 1.5x for burn/paralysis/poison.
#[inline]
pub fn status_modifier(status: Option<Status>) -> i64 {
    match status {
        Some(Status::Asleep | Status::Frozen) => 10240,
        Some(Status::Burned | Status::Paralyzed | Status::Poisoned) => 6144,
        None => MOD_SCALE,
    }
}

/// Catching Power modifier, doubled on a backstrike.
///
/// Levels without a table entry are rejected rather than defaulted.
pub fn catching_power_modifier(level: u8, backstrike: bool) -> Result<f64> {
    let multiplier = CATCHING_POWER_MULTIPLIERS
        .get(level as usize)
        .ok_or(CatchError::InvalidCatchingPower(level))?;
    let backstrike_multiplier = if backstrike { 2.0 } else { 1.0 };

    Ok(backstrike_multiplier * multiplier * MOD_SCALE as f64)
}

// ============================================================================
// Per-Ball Modifiers
// ============================================================================

/// Species modifier: the base catch rate, adjusted by weight for the Heavy Ball.
///
/// A bracketed Heavy Ball result never drops below 1.
pub fn species_modifier(catch_rate: u8, weight: f64, ball: BallId) -> i64 {
    let catch_rate = catch_rate as i64;

    if ball != BallId::HeavyBall {
        return catch_rate;
    }

    HEAVY_BALL_BRACKETS
        .iter()
        .find(|&&(lower, upper, _)| lower < weight && weight <= upper)
        .map(|&(_, _, offset)| (catch_rate + offset).max(1))
        .unwrap_or(catch_rate + HEAVY_BALL_DEFAULT_OFFSET)
}

/// Critical catch modifier by number of registered species.
///
/// Anything past the last bracket gets [`CRITICAL_CATCH_DEFAULT`].
pub fn critical_catch_modifier(registered: u16) -> i64 {
    CRITICAL_CATCH_BRACKETS
        .iter()
        .find(|&&(min, max, _)| (min..=max).contains(&registered))
        .map(|&(_, _, modifier)| modifier)
        .unwrap_or(CRITICAL_CATCH_DEFAULT)
}
