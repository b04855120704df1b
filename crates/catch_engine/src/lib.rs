//! catch_engine - Cartridge-accurate Poké Ball catch probability calculator
//!
//! Given a target profile, the battle situation and the player's save
//! progress, every Poké Ball scenario that can apply to the target is
//! enumerated and run through the game's fixed-point catch formula. Every
//! call is a pure function of its inputs; nothing is cached between calls.

/// Elemental types
pub mod types;

/// Poké Ball identifiers
pub mod balls;

/// Target profile
pub mod profile;

/// Battle and save contexts
pub mod context;

/// Scenario catalog
pub mod scenarios;

/// Fixed-point primitives
pub mod formula;

/// Modifier lookups
pub mod modifiers;

/// Staged modified catch rate
pub mod catch_rate;

/// Critical and shake odds
pub mod probability;

/// Full calculation and display helpers
pub mod report;

pub mod error;

// Re-export commonly used types
pub use balls::BallId;
pub use catch_rate::{CatchRateContext, ConstantModifiers, RateBreakdown};
pub use context::{BattleContext, CatchingPower, GameContext, HpIv, HpPreset, Status};
pub use error::{CatchError, Result};
pub use probability::CatchOdds;
pub use profile::{BaseStats, CatchProfile, Evolution, SpeciesEntry};
pub use report::{
    calculate_catch_rates, par_calculate_catch_rates, sort_for_display, trim_timer_tiers,
    CatchResult,
};
pub use scenarios::{enumerate_scenarios, generate_scenarios, CatchScenario, Requires};
pub use types::Type;
