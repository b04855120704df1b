//! Per-throw inputs: the battle situation and the player's save progress.
//!
//! Both contexts are plain values built fresh for each calculation. The
//! engine never keeps them between calls.

use serde::{Deserialize, Serialize};

use crate::error::{CatchError, Result};
use crate::profile::CatchProfile;

/// Major status conditions that affect catch rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Asleep,
    Frozen,
    Burned,
    Paralyzed,
    Poisoned,
}

impl Status {
    /// Parse from a status name (case-insensitive). Common short forms
    /// ("slp", "frz", "brn", "par", "psn") are accepted as well.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asleep" | "sleep" | "slp" => Some(Status::Asleep),
            "frozen" | "freeze" | "frz" => Some(Status::Frozen),
            "burned" | "burn" | "brn" => Some(Status::Burned),
            "paralyzed" | "paralysis" | "par" => Some(Status::Paralyzed),
            "poisoned" | "poison" | "psn" => Some(Status::Poisoned),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Status::Asleep => "Asleep",
            Status::Frozen => "Frozen",
            Status::Burned => "Burned",
            Status::Paralyzed => "Paralyzed",
            Status::Poisoned => "Poisoned",
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = CatchError;

    fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| CatchError::UnknownStatus(s.to_string()))
    }
}

/// Catching Power level from a meal or sandwich (0-3).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CatchingPower(u8);

impl CatchingPower {
    /// No Catching Power active.
    pub const NONE: Self = Self(0);

    /// Highest level with a table entry.
    pub const MAX_LEVEL: u8 = 3;

    pub fn new(level: u8) -> Result<Self> {
        if level <= Self::MAX_LEVEL {
            Ok(Self(level))
        } else {
            Err(CatchError::InvalidCatchingPower(level))
        }
    }

    pub const fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CatchingPower {
    type Error = CatchError;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<CatchingPower> for u8 {
    fn from(power: CatchingPower) -> u8 {
        power.0
    }
}

/// Which HP IV to assume when deriving the target's max HP.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HpIv {
    /// IV 0: the lowest max HP, and the catch calculations use it by default
    #[default]
    Min,
    /// IV 31
    Max,
}

/// Current HP shorthand matching the in-game HP bar colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HpPreset {
    /// Exactly 1 HP (False Swipe)
    #[default]
    ExactlyOne,
    /// Below 20% (red bar)
    RedBar,
    /// Below 50% (yellow bar)
    YellowBar,
    /// Up to 100% (green bar)
    GreenBar,
}

impl HpPreset {
    /// Current HP for this preset given the max HP. Never below 1.
    pub fn current_hp(self, max_hp: u16) -> u16 {
        let hp = match self {
            HpPreset::ExactlyOne => 1.0,
            HpPreset::RedBar => 0.2 * max_hp as f64,
            HpPreset::YellowBar => 0.5 * max_hp as f64,
            HpPreset::GreenBar => max_hp as f64,
        };
        (hp.floor() as u16).max(1)
    }
}

// ============================================================================
// Battle Context
// ============================================================================

/// Battle-time state of the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleContext {
    /// Target's max HP
    max_hp: u16,

    /// Target's current HP (1..=max_hp)
    current_hp: u16,

    /// Major status condition, if any
    pub status: Option<Status>,

    /// Whether the target was engaged from behind
    pub backstrike: bool,

    /// Active Catching Power level
    pub catching_power: CatchingPower,
}

impl BattleContext {
    /// Create a context with explicit HP values and no other effects.
    pub fn new(max_hp: u16, current_hp: u16) -> Result<Self> {
        if current_hp == 0 || current_hp > max_hp {
            return Err(CatchError::InvalidCurrentHp {
                current: current_hp,
                max: max_hp,
            });
        }

        Ok(Self {
            max_hp,
            current_hp,
            status: None,
            backstrike: false,
            catching_power: CatchingPower::NONE,
        })
    }

    /// Derive HP from the profile's level and base HP.
    pub fn for_profile(profile: &CatchProfile, iv: HpIv, preset: HpPreset) -> Self {
        let max_hp = match iv {
            HpIv::Min => profile.min_hp(),
            HpIv::Max => profile.max_hp(),
        };

        Self {
            max_hp,
            current_hp: preset.current_hp(max_hp),
            status: None,
            backstrike: false,
            catching_power: CatchingPower::NONE,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    pub fn status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    pub fn backstrike(mut self, backstrike: bool) -> Self {
        self.backstrike = backstrike;
        self
    }

    pub fn catching_power(mut self, power: CatchingPower) -> Self {
        self.catching_power = power;
        self
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    /// Re-check the HP invariant. Needed for contexts that arrived through
    /// deserialization rather than [`BattleContext::new`].
    pub fn validate(&self) -> Result<()> {
        Self::new(self.max_hp, self.current_hp).map(|_| ())
    }
}

// ============================================================================
// Game Context
// ============================================================================

/// Save-file progress relevant to catching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContext {
    /// Gym badges earned (0-8)
    pub badges: u8,

    /// Species registered in the Pokédex
    pub registered: u16,

    /// Whether the Catching Charm is owned
    pub catching_charm: bool,
}

impl GameContext {
    pub const fn new(badges: u8, registered: u16, catching_charm: bool) -> Self {
        Self {
            badges,
            registered,
            catching_charm,
        }
    }
}

impl Default for GameContext {
    /// All badges, no charm and 601 registered species.
    ///
    /// 601 is the count the catch tables were published against; a save
    /// with every Paldea, Kitakami and Blueberry entry registers 843.
    fn default() -> Self {
        Self::new(8, 601, false)
    }
}
