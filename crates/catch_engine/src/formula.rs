//! Fixed-point math primitives shared by the catch formula.
//!
//! Modifiers are 4096-scale fixed point (4096 = 1.0x). Every multiplicative
//! stage of the catch formula multiplies by a modifier and then rounds back
//! down with the game's biased floor, which is reproduced here exactly.

/// Fixed-point scale for modifiers (4096 = 1.0x)
pub const MOD_SCALE: i64 = 4096;

/// Bias added before the floor in [`game_round`] (half of `MOD_SCALE`).
const ROUND_BIAS: i64 = MOD_SCALE / 2;

/// Upper bound of a modified catch rate (255 × 4096).
pub const MAX_MODIFIED_CATCH_RATE: i64 = 0xFF000;

/// The game's rounding for 4096-scale products: `floor((x + 2048) / 4096)`.
///
/// Unlike the damage formula's pokeRound, an exact .5 rounds *up* here:
/// `game_round(2048) == 1`. Exact multiples of 4096 map straight to their
/// quotient.
#[inline]
pub const fn game_round(value: i64) -> i64 {
    (value + ROUND_BIAS).div_euclid(MOD_SCALE)
}

/// [`game_round`] for stages whose input is already fractional.
///
/// The addition and division run in `f64` before the floor, so a value that
/// is fractional going in keeps its full precision up to the floor.
#[inline]
pub fn game_round_f64(value: f64) -> i64 {
    ((value + ROUND_BIAS as f64) / MOD_SCALE as f64).floor() as i64
}

/// Clamp a modified catch rate to its cap.
#[inline]
pub const fn cap_catch_rate(rate: i64) -> i64 {
    if rate > MAX_MODIFIED_CATCH_RATE {
        MAX_MODIFIED_CATCH_RATE
    } else {
        rate
    }
}
