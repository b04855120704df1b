//! Poké Ball identifiers.

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::error::{CatchError, Result};

/// Every Poké Ball kind the game knows about.
///
/// Master, Cherish, Park and Strange Balls never appear in a catch scenario
/// (they either always succeed or cannot be thrown at wild Pokémon) but are
/// kept so ball names coming from other data sources still parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BallId {
    PokeBall = 0,
    GreatBall = 1,
    UltraBall = 2,
    MasterBall = 3,
    SafariBall = 4,
    FastBall = 5,
    LevelBall = 6,
    LureBall = 7,
    HeavyBall = 8,
    LoveBall = 9,
    FriendBall = 10,
    MoonBall = 11,
    SportBall = 12,
    NetBall = 13,
    NestBall = 14,
    RepeatBall = 15,
    TimerBall = 16,
    LuxuryBall = 17,
    PremierBall = 18,
    DiveBall = 19,
    DuskBall = 20,
    HealBall = 21,
    QuickBall = 22,
    CherishBall = 23,
    ParkBall = 24,
    DreamBall = 25,
    BeastBall = 26,
    StrangeBall = 27,
}

/// Lookup keys are lowercase with spaces, hyphens and accents stripped.
static BALL_KEYS: phf::Map<&'static str, BallId> = phf_map! {
    "pokeball" => BallId::PokeBall,
    "greatball" => BallId::GreatBall,
    "ultraball" => BallId::UltraBall,
    "masterball" => BallId::MasterBall,
    "safariball" => BallId::SafariBall,
    "fastball" => BallId::FastBall,
    "levelball" => BallId::LevelBall,
    "lureball" => BallId::LureBall,
    "heavyball" => BallId::HeavyBall,
    "loveball" => BallId::LoveBall,
    "friendball" => BallId::FriendBall,
    "moonball" => BallId::MoonBall,
    "sportball" => BallId::SportBall,
    "netball" => BallId::NetBall,
    "nestball" => BallId::NestBall,
    "repeatball" => BallId::RepeatBall,
    "timerball" => BallId::TimerBall,
    "luxuryball" => BallId::LuxuryBall,
    "premierball" => BallId::PremierBall,
    "diveball" => BallId::DiveBall,
    "duskball" => BallId::DuskBall,
    "healball" => BallId::HealBall,
    "quickball" => BallId::QuickBall,
    "cherishball" => BallId::CherishBall,
    "parkball" => BallId::ParkBall,
    "dreamball" => BallId::DreamBall,
    "beastball" => BallId::BeastBall,
    "strangeball" => BallId::StrangeBall,
};

impl BallId {
    /// Total number of ball kinds
    pub const COUNT: usize = 28;

    /// Parse a ball from its display name or any spacing/case variant of it
    /// ("Poké Ball", "poke-ball", "POKEBALL").
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter_map(|c| match c {
                'é' | 'É' => Some('e'),
                c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
                _ => None,
            })
            .collect();
        BALL_KEYS.get(key.as_str()).copied()
    }

    /// In-game display name.
    pub const fn name(self) -> &'static str {
        match self {
            BallId::PokeBall => "Poké Ball",
            BallId::GreatBall => "Great Ball",
            BallId::UltraBall => "Ultra Ball",
            BallId::MasterBall => "Master Ball",
            BallId::SafariBall => "Safari Ball",
            BallId::FastBall => "Fast Ball",
            BallId::LevelBall => "Level Ball",
            BallId::LureBall => "Lure Ball",
            BallId::HeavyBall => "Heavy Ball",
            BallId::LoveBall => "Love Ball",
            BallId::FriendBall => "Friend Ball",
            BallId::MoonBall => "Moon Ball",
            BallId::SportBall => "Sport Ball",
            BallId::NetBall => "Net Ball",
            BallId::NestBall => "Nest Ball",
            BallId::RepeatBall => "Repeat Ball",
            BallId::TimerBall => "Timer Ball",
            BallId::LuxuryBall => "Luxury Ball",
            BallId::PremierBall => "Premier Ball",
            BallId::DiveBall => "Dive Ball",
            BallId::DuskBall => "Dusk Ball",
            BallId::HealBall => "Heal Ball",
            BallId::QuickBall => "Quick Ball",
            BallId::CherishBall => "Cherish Ball",
            BallId::ParkBall => "Park Ball",
            BallId::DreamBall => "Dream Ball",
            BallId::BeastBall => "Beast Ball",
            BallId::StrangeBall => "Strange Ball",
        }
    }
}

impl std::fmt::Display for BallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for BallId {
    type Error = CatchError;

    fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| CatchError::UnknownBall(s.to_string()))
    }
}
