//! Test helper functions for catch calculation tests.
//!
//! These helpers build engine inputs from fixture data and compare results.

use catch_engine::{
    calculate_catch_rates, BallId, BaseStats, BattleContext, CatchProfile, CatchResult,
    CatchingPower, Evolution, Type,
};

use super::fixtures::{CatchFixture, CatchTestCase, ExpectedResult};

/// Absolute tolerance for probabilities.
pub const PROBABILITY_EPSILON: f64 = 1e-12;

// ============================================================================
// Profiles
// ============================================================================

pub fn wobbuffet(level: u8) -> CatchProfile {
    CatchProfile::new(
        202,
        level,
        BaseStats::new(190, 33, 58, 33, 58, 33),
        &[Type::Psychic],
        45,
        28.5,
        127,
    )
    .expect("valid profile")
    .named("Wobbuffet")
}

pub fn clefairy(level: u8) -> CatchProfile {
    CatchProfile::new(
        35,
        level,
        BaseStats::new(70, 45, 48, 60, 65, 35),
        &[Type::Fairy],
        150,
        7.5,
        191,
    )
    .expect("valid profile")
    .named("Clefairy")
    .evolution(Evolution {
        method: "Use Item".into(),
        level: None,
        species: "Clefable".into(),
        item: Some("Moon Stone".into()),
    })
}

pub fn snorlax(level: u8) -> CatchProfile {
    CatchProfile::new(
        143,
        level,
        BaseStats::new(160, 110, 65, 65, 110, 30),
        &[Type::Normal],
        25,
        460.0,
        31,
    )
    .expect("valid profile")
    .named("Snorlax")
}

pub fn nihilego(level: u8) -> CatchProfile {
    CatchProfile::new(
        793,
        level,
        BaseStats::new(109, 53, 47, 127, 131, 103),
        &[Type::Rock, Type::Poison],
        45,
        55.5,
        255,
    )
    .expect("valid profile")
    .named("Nihilego")
}

/// First result for a ball with the given condition.
pub fn find<'a>(
    results: &'a [CatchResult],
    ball: BallId,
    condition: Option<&str>,
) -> Option<&'a CatchResult> {
    results
        .iter()
        .find(|r| r.ball == ball && r.condition.as_deref() == condition)
}

// ============================================================================
// Fixture Checks
// ============================================================================

/// Build the battle context a fixture case describes.
pub fn battle_for_case(profile: &CatchProfile, case: &CatchTestCase) -> Result<BattleContext, String> {
    let battle = BattleContext::for_profile(profile, case.iv, case.hp);

    if battle.max_hp() != case.max_hp {
        return Err(format!(
            "Max HP mismatch: expected {}, got {}",
            case.max_hp,
            battle.max_hp()
        ));
    }
    if battle.current_hp() != case.current_hp {
        return Err(format!(
            "Current HP mismatch: expected {}, got {}",
            case.current_hp,
            battle.current_hp()
        ));
    }

    let power = CatchingPower::new(case.catching_power).map_err(|e| e.to_string())?;
    Ok(battle
        .status(case.status)
        .backstrike(case.backstrike)
        .catching_power(power))
}

/// Run one fixture case and compare every scenario.
pub fn run_catch_case(fixture: &CatchFixture, case: &CatchTestCase) -> Result<(), String> {
    let profile = fixture
        .profiles
        .get(&case.profile)
        .ok_or_else(|| format!("Unknown profile: {}", case.profile))?
        .clone()
        .at_level(case.level)
        .map_err(|e| e.to_string())?;

    let battle = battle_for_case(&profile, case)?;
    let results = calculate_catch_rates(&profile, &battle, &case.game).map_err(|e| e.to_string())?;

    if results.len() != case.expected.len() {
        return Err(format!(
            "Scenario count mismatch: expected {}, got {}\n  Actual: {:?}",
            case.expected.len(),
            results.len(),
            results
                .iter()
                .map(|r| (r.ball.name(), r.condition.as_deref()))
                .collect::<Vec<_>>()
        ));
    }

    for (i, (actual, expected)) in results.iter().zip(&case.expected).enumerate() {
        compare_result(actual, expected).map_err(|e| format!("Scenario {i}: {e}"))?;
    }

    Ok(())
}

fn compare_result(actual: &CatchResult, expected: &ExpectedResult) -> Result<(), String> {
    let ball = BallId::try_from(expected.ball.as_str()).map_err(|e| e.to_string())?;

    if actual.ball != ball || actual.condition != expected.condition {
        return Err(format!(
            "Scenario mismatch: expected {} {:?}, got {} {:?}",
            expected.ball,
            expected.condition,
            actual.ball.name(),
            actual.condition
        ));
    }
    if actual.base_rate != expected.base_rate {
        return Err(format!(
            "{} base rate: expected {}, got {}",
            expected.ball, expected.base_rate, actual.base_rate
        ));
    }
    if actual.modified_catch_rate != expected.modified_catch_rate {
        return Err(format!(
            "{} modified catch rate: expected {}, got {}",
            expected.ball, expected.modified_catch_rate, actual.modified_catch_rate
        ));
    }

    let critical_odds = expected.critical_value as f64 / 256.0;
    if actual.critical_odds != critical_odds {
        return Err(format!(
            "{} critical odds: expected {}, got {}",
            expected.ball, critical_odds, actual.critical_odds
        ));
    }
    if (actual.catch_probability - expected.catch_probability).abs() > PROBABILITY_EPSILON {
        return Err(format!(
            "{} catch probability: expected {}, got {}",
            expected.ball, expected.catch_probability, actual.catch_probability
        ));
    }

    Ok(())
}
