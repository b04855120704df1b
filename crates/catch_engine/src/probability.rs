//! Capture probability from a modified catch rate.
//!
//! A throw first rolls for a critical capture. A critical capture needs one
//! successful shake check, a normal capture needs four in a row.

use serde::Serialize;

use crate::formula::{game_round, MAX_MODIFIED_CATCH_RATE};

/// Scale of the critical roll.
pub const CRITICAL_SCALE: f64 = 256.0;

/// Scale of a shake check.
pub const SHAKE_SCALE: f64 = 65536.0;

/// Shake checks a normal capture has to pass.
pub const SHAKE_CHECKS: u32 = 4;

/// Numerator of the fixed-point reciprocal used for the critical value
/// (`715827883 / 2^32` ≈ 1/6).
const CRITICAL_RECIPROCAL: i64 = 715_827_883;

/// `2^32 * 4096`: undoes the reciprocal's scale and the 4096 modifier scale.
const CRITICAL_DIVISOR: i64 = (1 << 32) * 4096;

/// Exponent of the shake value curve.
const SHAKE_EXPONENT: f64 = 3.0 / 16.0;

/// Critical capture value (0-255).
///
/// `floor(round(critical_modifier * rate) * charm * 715827883 / (2^32 * 4096))`
/// with `charm` = 2 when the Catching Charm is owned.
pub fn critical_catch_value(critical_modifier: i64, modified_rate: i64, catching_charm: bool) -> i64 {
    let charm = if catching_charm { 2 } else { 1 };
    (game_round(critical_modifier * modified_rate) * charm * CRITICAL_RECIPROCAL)
        .div_euclid(CRITICAL_DIVISOR)
}

/// Probability that a throw is a critical capture.
#[inline]
pub fn critical_catch_odds(critical_value: i64) -> f64 {
    critical_value as f64 / CRITICAL_SCALE
}

/// Shake value: `65536 / (0xFF000 / rate) ^ (3/16)`. Zero for a zero rate.
pub fn shake_value(modified_rate: i64) -> f64 {
    if modified_rate <= 0 {
        return 0.0;
    }
    let ratio = MAX_MODIFIED_CATCH_RATE as f64 / modified_rate as f64;
    SHAKE_SCALE / ratio.powf(SHAKE_EXPONENT)
}

/// Probability of passing one shake check.
#[inline]
pub fn shake_odds(modified_rate: i64) -> f64 {
    shake_value(modified_rate) / SHAKE_SCALE
}

/// Odds of the ball holding on the given path.
///
/// `powf` rather than `powi`: repeated multiplication drifts by an ulp.
#[inline]
pub fn successful_catch_odds(is_critical: bool, shake_odds: f64) -> f64 {
    if is_critical {
        shake_odds
    } else {
        shake_odds.powf(SHAKE_CHECKS as f64)
    }
}

// ============================================================================
// Catch Odds
// ============================================================================

/// Outcome odds for one modified catch rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CatchOdds {
    /// Probability of a critical capture roll
    pub critical: f64,
    /// Probability of passing one shake check
    pub shake: f64,
}

impl CatchOdds {
    pub fn new(critical_modifier: i64, modified_rate: i64, catching_charm: bool) -> Self {
        let critical_value = critical_catch_value(critical_modifier, modified_rate, catching_charm);
        Self {
            critical: critical_catch_odds(critical_value),
            shake: shake_odds(modified_rate),
        }
    }

    /// Caught through a critical capture.
    pub fn with_critical(&self) -> f64 {
        self.critical * successful_catch_odds(true, self.shake)
    }

    /// Caught through four shake checks.
    pub fn without_critical(&self) -> f64 {
        (1.0 - self.critical) * successful_catch_odds(false, self.shake)
    }

    /// Overall capture probability.
    pub fn caught(&self) -> f64 {
        self.with_critical() + self.without_critical()
    }

    pub fn not_caught(&self) -> f64 {
        1.0 - self.caught()
    }
}
