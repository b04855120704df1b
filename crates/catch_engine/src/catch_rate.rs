//! Modified catch rate.
//!
//! The five context-wide modifiers are computed once per calculation into
//! [`ConstantModifiers`]; each scenario then runs through the staged
//! rounding chain below. The order of the stages and the precision of each
//! intermediate are part of the result: reordering them, or rounding the
//! fractional stages early, produces different rates.
//!
//! ```text
//! a = hp
//! b = round(dark_grass * a)
//! c = species * b
//! d = round(ball_rate * c)
//! e = round(badge * d) / (3 * max_hp)             (fractional)
//! f = e, or floor((36 - 2 * level) * e / 10)      (level <= 13)
//! g = round(status * f)
//! modified = min(round(catching_power * g), 0xFF000)
//! ```

use serde::Serialize;

use crate::context::{BattleContext, GameContext};
use crate::error::Result;
use crate::formula::{cap_catch_rate, game_round, game_round_f64};
use crate::modifiers::{
    badge_modifier, catching_power_modifier, dark_grass_modifier, hp_modifier, species_modifier,
    status_modifier,
};
use crate::profile::{validate_level, CatchProfile};
use crate::scenarios::CatchScenario;

/// Targets at or below this level get the low-level catch bonus.
pub const LOW_LEVEL_BONUS_MAX: u8 = 13;

// ============================================================================
// Constant Modifiers
// ============================================================================

/// Modifiers shared by every scenario of one calculation (4096-scale).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConstantModifiers {
    pub hp: i64,
    pub dark_grass: i64,
    /// Unrounded
    pub badge: f64,
    pub status: i64,
    /// Unrounded
    pub catching_power: f64,
}

impl ConstantModifiers {
    /// Compute the shared modifiers. Fails on an out-of-table Catching Power.
    pub fn new(profile: &CatchProfile, battle: &BattleContext, game: &GameContext) -> Result<Self> {
        Ok(Self {
            hp: hp_modifier(battle.max_hp(), battle.current_hp()),
            dark_grass: dark_grass_modifier(game.registered),
            badge: badge_modifier(game.badges, profile.level()),
            status: status_modifier(battle.status),
            catching_power: catching_power_modifier(
                battle.catching_power.level(),
                battle.backstrike,
            )?,
        })
    }
}

// ============================================================================
// Rate Breakdown
// ============================================================================

/// Every intermediate of the rounding chain for one scenario.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RateBreakdown {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
    pub e: f64,
    pub f: f64,
    pub g: i64,
    pub modified: i64,
}

// ============================================================================
// Catch Rate Context
// ============================================================================

/// Validated inputs for one calculation, reusable across every scenario.
#[derive(Clone, Debug)]
pub struct CatchRateContext<'a> {
    profile: &'a CatchProfile,
    max_hp: u16,
    modifiers: ConstantModifiers,
}

impl<'a> CatchRateContext<'a> {
    /// Validate the inputs and compute the constant modifiers.
    ///
    /// Checks the level, the HP invariant and the Catching Power level
    /// before anything else runs.
    pub fn new(
        profile: &'a CatchProfile,
        battle: &BattleContext,
        game: &GameContext,
    ) -> Result<Self> {
        validate_level(profile.level())?;
        battle.validate()?;

        Ok(Self {
            profile,
            max_hp: battle.max_hp(),
            modifiers: ConstantModifiers::new(profile, battle, game)?,
        })
    }

    pub fn profile(&self) -> &CatchProfile {
        self.profile
    }

    pub fn modifiers(&self) -> &ConstantModifiers {
        &self.modifiers
    }

    /// Run the chain for one scenario, keeping every intermediate.
    pub fn breakdown(&self, scenario: &CatchScenario) -> RateBreakdown {
        let m = &self.modifiers;
        let level = self.profile.level();

        let a = m.hp;
        let b = game_round(m.dark_grass * a);
        let c = species_modifier(self.profile.catch_rate(), self.profile.weight(), scenario.ball) * b;
        let d = game_round(scenario.rate * c);

        let e = game_round_f64(m.badge * d as f64) as f64 / (3 * self.max_hp as i64) as f64;
        let f = if level <= LOW_LEVEL_BONUS_MAX {
            ((36 - 2 * level as i64) as f64 * e / 10.0).floor()
        } else {
            e
        };

        let g = game_round_f64(m.status as f64 * f);
        let modified = cap_catch_rate(game_round_f64(m.catching_power * g as f64));

        RateBreakdown {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            modified,
        }
    }

    /// Modified catch rate for one scenario, in `0..=0xFF000`.
    #[inline]
    pub fn modified_catch_rate(&self, scenario: &CatchScenario) -> i64 {
        self.breakdown(scenario).modified
    }
}
