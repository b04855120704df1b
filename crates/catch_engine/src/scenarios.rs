//! Catch scenario catalog.
//!
//! For a given target, every Poké Ball that can be thrown is expanded into
//! one or more scenarios: the ball, its 4096-scale ball rate, and the real
//! world precondition under which that rate applies. Balls whose rate
//! depends on the target itself (speed, level, types, evolution, species)
//! branch into mutually exclusive scenarios and only the branch matching the
//! profile survives. Balls whose rate depends on the moment of capture
//! (water, time of day, turn count) are always emitted; the caller decides
//! whether the condition holds.

use phf::phf_set;
use serde::Serialize;

use crate::balls::BallId;
use crate::formula::MOD_SCALE;
use crate::profile::{CatchProfile, LEVEL_CAP};
use crate::types::Type;

// ============================================================================
// Ball Rates
// ============================================================================

/// Ball rates for the fixed-rate balls (4096 = 1.0x).
pub mod rates {
    pub const BASE: i64 = 0x1000;
    pub const GREAT: i64 = 0x1800;
    pub const ULTRA: i64 = 0x2000;
    pub const DUSK: i64 = 0x3000;
    pub const NET: i64 = 0x3800;
    pub const DIVE: i64 = 0x3800;
    pub const REPEAT: i64 = 0x3800;
    pub const FAST: i64 = 0x4000;
    pub const LURE: i64 = 0x4000;
    pub const MOON: i64 = 0x4000;
    pub const DREAM: i64 = 0x4000;
    pub const QUICK: i64 = 0x5000;
    pub const BEAST: i64 = 0x5000;
    pub const LOVE: i64 = 0x8000;
    pub const LEVEL_4X: i64 = 0x8000;
    pub const LEVEL_2X: i64 = 0x4000;
    pub const LEVEL_1X: i64 = 0x2000;
    /// Beast Ball against anything that is not an Ultra Beast (0.1x)
    pub const BEAST_PENALTY: i64 = 0x19A;
    /// Timer Ball increment per elapsed turn
    pub const TIMER_STEP: i64 = 1229;
    pub const TIMER_MAX: i64 = 0x4000;
}

/// Turn tiers enumerated for the Timer Ball (0..=10).
pub const TIMER_TURN_TIERS: u8 = 10;

/// Minimum base Speed for the Fast Ball bonus.
pub const FAST_BALL_SPEED_MIN: u16 = 100;

/// Nest Ball bonus applies strictly below this level.
pub const NEST_BALL_LEVEL_MIN: u8 = 30;

/// Evolution item that enables the Moon Ball bonus.
pub const MOON_STONE: &str = "Moon Stone";

/// Types that enable the Net Ball bonus.
pub const NET_BALL_TYPES: [Type; 2] = [Type::Bug, Type::Water];

/// National Dex numbers of the Ultra Beasts.
pub static ULTRA_BEASTS: phf::Set<u16> = phf_set! {
    793u16, 794u16, 795u16, 796u16, 797u16, 798u16, 799u16, 803u16, 804u16, 805u16, 806u16,
};

/// Balls with no bonus at all (1.0x, no condition).
const BASE_RATE_BALLS: [BallId; 17] = [
    BallId::PokeBall,
    BallId::SafariBall,
    BallId::LevelBall,
    BallId::LureBall,
    BallId::HeavyBall,
    BallId::LoveBall,
    BallId::FriendBall,
    BallId::SportBall,
    BallId::DiveBall,
    BallId::NestBall,
    BallId::RepeatBall,
    BallId::TimerBall,
    BallId::LuxuryBall,
    BallId::PremierBall,
    BallId::DuskBall,
    BallId::HealBall,
    BallId::QuickBall,
];

bitflags::bitflags! {
    /// Situational predicates the caller must confirm before a scenario's
    /// rate applies. Structural conditions (speed, types, evolution, dex
    /// number, target level) are settled by the catalog and never appear here.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct Requires: u16 {
        /// A specific number of turns has elapsed
        const TURN_COUNT     = 1 << 0;
        /// The user's Pokémon is at or above a given level
        const USER_LEVEL     = 1 << 1;
        /// The user's Pokémon is the same species with the opposite gender
        const OPPOSITE_GENDER = 1 << 2;
        /// The target is in or just above water
        const NEAR_WATER     = 1 << 3;
        /// The target is in water
        const IN_WATER       = 1 << 4;
        /// The species is already registered in the Pokédex
        const REGISTERED     = 1 << 5;
        /// The battle takes place in a cave or at night
        const CAVE_OR_NIGHT  = 1 << 6;
        /// The ball is thrown on the first turn
        const FIRST_TURN     = 1 << 7;
        /// The target is asleep
        const ASLEEP         = 1 << 8;
    }
}

// ============================================================================
// Catch Scenario
// ============================================================================

/// One ball under one precondition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatchScenario {
    /// Ball being thrown
    pub ball: BallId,

    /// Ball rate (4096 = 1.0x)
    pub rate: i64,

    /// Human-readable precondition, `None` for unconditional rates
    pub condition: Option<String>,

    /// Whether the precondition can hold for this target at all
    pub is_possible: bool,

    /// Situational predicates the caller still has to confirm
    pub requires: Requires,

    /// Elapsed turns for Timer Ball tiers
    pub turns: Option<u8>,
}

impl CatchScenario {
    /// An unconditional scenario.
    pub fn new(ball: BallId, rate: i64) -> Self {
        Self {
            ball,
            rate,
            condition: None,
            is_possible: true,
            requires: Requires::empty(),
            turns: None,
        }
    }

    fn when(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    fn possible(mut self, is_possible: bool) -> Self {
        self.is_possible = is_possible;
        self
    }

    fn requires(mut self, requires: Requires) -> Self {
        self.requires = requires;
        self
    }

    /// Ball rate as a multiplier (for display).
    pub fn multiplier(&self) -> f64 {
        self.rate as f64 / MOD_SCALE as f64
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Every scenario for this target, impossible branches included.
///
/// Order is fixed: the 1.0x balls, the Timer Ball tiers, then the bonus
/// balls in catalog order. Use [`generate_scenarios`] for the filtered list.
pub fn enumerate_scenarios(profile: &CatchProfile) -> Vec<CatchScenario> {
    let mut scenarios = Vec::with_capacity(48);

    scenarios.extend(
        BASE_RATE_BALLS
            .iter()
            .map(|&ball| CatchScenario::new(ball, rates::BASE)),
    );
    scenarios.extend(timer_ball(0..=TIMER_TURN_TIERS));

    scenarios.push(CatchScenario::new(BallId::GreatBall, rates::GREAT));
    scenarios.push(CatchScenario::new(BallId::UltraBall, rates::ULTRA));
    scenarios.extend(fast_ball(profile));
    scenarios.extend(level_ball(profile));
    scenarios.push(
        CatchScenario::new(BallId::LureBall, rates::LURE)
            .when("Target Pokémon is in water or just above water")
            .requires(Requires::NEAR_WATER),
    );
    scenarios.push(
        CatchScenario::new(BallId::LoveBall, rates::LOVE)
            .when("User Pokémon Species is the same as Target, but opposite gender")
            .possible(profile.has_gender())
            .requires(Requires::OPPOSITE_GENDER),
    );
    scenarios.extend(moon_ball(profile));
    scenarios.extend(net_ball(profile));
    scenarios.push(
        CatchScenario::new(BallId::DiveBall, rates::DIVE)
            .when("Target Pokémon is in water")
            .requires(Requires::IN_WATER),
    );
    scenarios.extend(nest_ball(profile));
    scenarios.push(
        CatchScenario::new(BallId::RepeatBall, rates::REPEAT)
            .when("Target Pokémon has been registered")
            .requires(Requires::REGISTERED),
    );
    scenarios.push(
        CatchScenario::new(BallId::DuskBall, rates::DUSK)
            .when("Catch inside caves or during nighttime")
            .requires(Requires::CAVE_OR_NIGHT),
    );
    scenarios.push(
        CatchScenario::new(BallId::QuickBall, rates::QUICK)
            .when("0 turns since battle started")
            .requires(Requires::FIRST_TURN),
    );
    scenarios.push(
        CatchScenario::new(BallId::DreamBall, rates::DREAM)
            .when("Target Pokémon is asleep")
            .requires(Requires::ASLEEP),
    );
    scenarios.extend(beast_ball(profile));

    scenarios
}

/// Every scenario whose precondition can hold for this target, in catalog order.
pub fn generate_scenarios(profile: &CatchProfile) -> Vec<CatchScenario> {
    enumerate_scenarios(profile)
        .into_iter()
        .filter(|scenario| scenario.is_possible)
        .collect()
}

/// Whether a dex number belongs to an Ultra Beast.
pub fn is_ultra_beast(dex_no: u16) -> bool {
    ULTRA_BEASTS.contains(&dex_no)
}

/// Timer Ball rate after `turns` turns: `min(turns * 1229 + 4096, 16384)`.
pub fn timer_ball_rate(turns: u8) -> i64 {
    (turns as i64 * rates::TIMER_STEP + rates::BASE).min(rates::TIMER_MAX)
}

/// Nest Ball rate below level 30: `floor(((41 - level) * 4096 + 0.5) / 10)`.
pub fn nest_ball_rate(level: u8) -> i64 {
    // The +0.5 never crosses a multiple of 10 for integer input
    (41 - level as i64) * MOD_SCALE / 10
}

// ============================================================================
// Branching Balls
// ============================================================================

fn timer_ball(turns: std::ops::RangeInclusive<u8>) -> impl Iterator<Item = CatchScenario> {
    turns.map(|turns| {
        let unit = if turns == 1 { "turn" } else { "turns" };
        let mut scenario = CatchScenario::new(BallId::TimerBall, timer_ball_rate(turns))
            .when(format!("{turns} {unit} since battle started"))
            .requires(Requires::TURN_COUNT);
        scenario.turns = Some(turns);
        scenario
    })
}

fn fast_ball(profile: &CatchProfile) -> [CatchScenario; 2] {
    let is_fast = profile.base_stats().speed >= FAST_BALL_SPEED_MIN;
    [
        CatchScenario::new(BallId::FastBall, rates::FAST)
            .when(format!("Target Pokémon Speed >= {FAST_BALL_SPEED_MIN}"))
            .possible(is_fast),
        CatchScenario::new(BallId::FastBall, rates::BASE)
            .when(format!("Target Pokémon Speed < {FAST_BALL_SPEED_MIN}"))
            .possible(!is_fast),
    ]
}

fn level_ball(profile: &CatchProfile) -> [CatchScenario; 3] {
    let level = profile.level() as u16;
    let cap = LEVEL_CAP as u16;

    let at_least = |multiple: u16| {
        let required = multiple * level;
        // At the cap the only qualifying level is the cap itself
        let op = if required == cap { "=" } else { ">=" };
        format!("User Pokémon Level {op} {required}")
    };

    [
        CatchScenario::new(BallId::LevelBall, rates::LEVEL_4X)
            .when(at_least(4))
            .possible(4 * level <= cap)
            .requires(Requires::USER_LEVEL),
        CatchScenario::new(BallId::LevelBall, rates::LEVEL_2X)
            .when(at_least(2))
            .possible(2 * level <= cap)
            .requires(Requires::USER_LEVEL),
        CatchScenario::new(BallId::LevelBall, rates::LEVEL_1X)
            .when(format!("User Pokémon Level > {level}"))
            .possible(level < cap)
            .requires(Requires::USER_LEVEL),
    ]
}

fn moon_ball(profile: &CatchProfile) -> [CatchScenario; 2] {
    let evolves = profile.evolves_with_item(MOON_STONE);
    [
        CatchScenario::new(BallId::MoonBall, rates::MOON)
            .when(format!("Target Pokémon evolves with {MOON_STONE}"))
            .possible(evolves),
        CatchScenario::new(BallId::MoonBall, rates::BASE)
            .when(format!("Target Pokémon does not evolve with {MOON_STONE}"))
            .possible(!evolves),
    ]
}

fn net_ball(profile: &CatchProfile) -> [CatchScenario; 2] {
    let matches = NET_BALL_TYPES.iter().any(|&ty| profile.has_type(ty));
    [
        CatchScenario::new(BallId::NetBall, rates::NET)
            .when("Target Pokémon is either Bug or Water type")
            .possible(matches),
        CatchScenario::new(BallId::NetBall, rates::BASE)
            .when("Target Pokémon is neither Bug nor Water type")
            .possible(!matches),
    ]
}

fn nest_ball(profile: &CatchProfile) -> [CatchScenario; 2] {
    let level = profile.level();
    let is_low = level < NEST_BALL_LEVEL_MIN;
    [
        CatchScenario::new(BallId::NestBall, nest_ball_rate(level))
            .when(format!("Target Pokémon Level < {NEST_BALL_LEVEL_MIN}"))
            .possible(is_low),
        CatchScenario::new(BallId::NestBall, rates::BASE)
            .when(format!("Target Pokémon Level >= {NEST_BALL_LEVEL_MIN}"))
            .possible(!is_low),
    ]
}

fn beast_ball(profile: &CatchProfile) -> [CatchScenario; 2] {
    let is_ub = is_ultra_beast(profile.dex_no());
    [
        CatchScenario::new(BallId::BeastBall, rates::BEAST)
            .when("Target Pokémon is an Ultra Beast")
            .possible(is_ub),
        CatchScenario::new(BallId::BeastBall, rates::BEAST_PENALTY)
            .when("Target Pokémon is not an Ultra Beast")
            .possible(!is_ub),
    ]
}
