//! Full calculation: every feasible scenario for one target, evaluated.
//!
//! [`calculate_catch_rates`] is the single entry point most callers need.
//! The display helpers at the bottom reproduce the ranked table shown to
//! players and are never applied implicitly.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Serialize;

use crate::balls::BallId;
use crate::catch_rate::CatchRateContext;
use crate::context::{BattleContext, GameContext};
use crate::error::Result;
use crate::modifiers::critical_catch_modifier;
use crate::probability::CatchOdds;
use crate::profile::CatchProfile;
use crate::scenarios::{generate_scenarios, CatchScenario, Requires};

/// One evaluated scenario.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatchResult {
    pub ball: BallId,
    pub condition: Option<String>,
    pub requires: Requires,
    /// Elapsed turns for Timer Ball tiers
    pub turns: Option<u8>,
    /// Ball rate (4096 = 1.0x)
    pub base_rate: i64,
    pub modified_catch_rate: i64,
    pub critical_odds: f64,
    pub shake_odds: f64,
    pub catch_probability: f64,
}

impl CatchResult {
    fn evaluate(ctx: &CatchRateContext<'_>, game: &GameContext, scenario: CatchScenario) -> Self {
        let modified_catch_rate = ctx.modified_catch_rate(&scenario);
        let odds = CatchOdds::new(
            critical_catch_modifier(game.registered),
            modified_catch_rate,
            game.catching_charm,
        );

        Self {
            ball: scenario.ball,
            condition: scenario.condition,
            requires: scenario.requires,
            turns: scenario.turns,
            base_rate: scenario.rate,
            modified_catch_rate,
            critical_odds: odds.critical,
            shake_odds: odds.shake,
            catch_probability: odds.caught(),
        }
    }

    /// Outcome breakdown for this result.
    pub fn odds(&self) -> CatchOdds {
        CatchOdds {
            critical: self.critical_odds,
            shake: self.shake_odds,
        }
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate every feasible scenario in catalog order.
///
/// Inputs are validated before any scenario runs; a bad level, HP or
/// Catching Power fails the whole call.
pub fn calculate_catch_rates(
    profile: &CatchProfile,
    battle: &BattleContext,
    game: &GameContext,
) -> Result<Vec<CatchResult>> {
    let ctx = CatchRateContext::new(profile, battle, game)?;

    Ok(generate_scenarios(profile)
        .into_iter()
        .map(|scenario| CatchResult::evaluate(&ctx, game, scenario))
        .collect())
}

/// [`calculate_catch_rates`] with scenarios spread across the rayon pool.
///
/// Output order is identical to the serial version.
pub fn par_calculate_catch_rates(
    profile: &CatchProfile,
    battle: &BattleContext,
    game: &GameContext,
) -> Result<Vec<CatchResult>> {
    let ctx = CatchRateContext::new(profile, battle, game)?;

    Ok(generate_scenarios(profile)
        .into_par_iter()
        .map(|scenario| CatchResult::evaluate(&ctx, game, scenario))
        .collect())
}

// ============================================================================
// Display Helpers
// ============================================================================

/// Drop Timer Ball tiers past the first one that always catches.
///
/// If no tier reaches a probability of exactly 1, every tier is kept.
/// Results without a turn count (including the unconditional Timer Ball)
/// are untouched.
pub fn trim_timer_tiers(results: &mut Vec<CatchResult>) {
    let first_certain = results
        .iter()
        .filter(|r| r.ball == BallId::TimerBall && r.catch_probability == 1.0)
        .filter_map(|r| r.turns)
        .min();

    if let Some(limit) = first_certain {
        results.retain(|r| r.ball != BallId::TimerBall || r.turns.map_or(true, |t| t <= limit));
    }
}

/// Ranked order: probability, then ball name, then turns, then condition,
/// all descending. Results without a turn count sort after those with one.
pub fn sort_for_display(results: &mut [CatchResult]) {
    results.sort_by(display_order);
}

fn display_order(a: &CatchResult, b: &CatchResult) -> Ordering {
    b.catch_probability
        .total_cmp(&a.catch_probability)
        .then_with(|| b.ball.name().cmp(a.ball.name()))
        .then_with(|| match (a.turns, b.turns) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| {
            let a = a.condition.as_deref().unwrap_or("");
            let b = b.condition.as_deref().unwrap_or("");
            b.cmp(a)
        })
}
