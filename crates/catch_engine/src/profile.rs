//! Target Pokémon profile.
//!
//! A `CatchProfile` is the immutable snapshot of everything the catch
//! formula needs to know about the wild Pokémon: species identity, level,
//! base stats, types, base catch rate, weight, gender ratio and how it
//! evolves. Where the data came from (a scraped catalog, an API, a test
//! fixture) does not matter to the engine.

use serde::{Deserialize, Serialize};

use crate::error::{CatchError, Result};
use crate::types::Type;

/// Highest level a Pokémon can reach.
pub const LEVEL_CAP: u8 = 100;

/// Gender ratio value used for genderless / unknown-gender species.
pub const GENDER_UNKNOWN: u8 = 255;

/// Highest individual value for a stat.
pub const MAX_IV: u8 = 31;

/// Largest base HP whose level-100 max HP still fits in a `u16`.
pub const MAX_BASE_HP: u16 = (u16::MAX - MAX_IV as u16 - LEVEL_CAP as u16 - 10) / 2;

/// Base stats [HP, Atk, Def, SpA, SpD, Spe].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    pub const fn new(
        hp: u16,
        attack: u16,
        defense: u16,
        special_attack: u16,
        special_defense: u16,
        speed: u16,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }
}

/// How a species evolves into its next stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    /// Evolution method as written in the source data ("Level Up", "Use Item", ...)
    pub method: String,

    /// Level requirement, if any
    #[serde(default)]
    pub level: Option<u8>,

    /// Species it evolves into
    pub species: String,

    /// Triggering item ("Moon Stone", ...), if any
    #[serde(default)]
    pub item: Option<String>,
}

/// Immutable description of the Pokémon being caught.
///
/// Construct with [`CatchProfile::new`]; the level can be swapped for a new
/// snapshot with [`CatchProfile::with_level`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileData", into = "ProfileData")]
pub struct CatchProfile {
    dex_no: u16,
    name: String,
    level: u8,
    base_stats: BaseStats,
    primary_type: Type,
    secondary_type: Option<Type>,
    catch_rate: u8,
    weight: f64,
    gender_ratio: u8,
    evolution: Option<Evolution>,
}

impl CatchProfile {
    /// Create a profile, validating the level (1-100), the type count (1-2)
    /// and that base HP stays at or below [`MAX_BASE_HP`].
    ///
    /// Other stats, weight and catch rate are taken as given; the data
    /// provider is responsible for their sanity.
    pub fn new(
        dex_no: u16,
        level: u8,
        base_stats: BaseStats,
        types: &[Type],
        catch_rate: u8,
        weight: f64,
        gender_ratio: u8,
    ) -> Result<Self> {
        validate_level(level)?;
        if base_stats.hp > MAX_BASE_HP {
            return Err(CatchError::BaseHpOutOfRange(base_stats.hp));
        }

        let (primary_type, secondary_type) = match *types {
            [primary] => (primary, None),
            // A duplicated type is a mono-type written twice
            [primary, secondary] if primary == secondary => (primary, None),
            [primary, secondary] => (primary, Some(secondary)),
            _ => return Err(CatchError::InvalidTypeCount(types.len())),
        };

        Ok(Self {
            dex_no,
            name: String::new(),
            level,
            base_stats,
            primary_type,
            secondary_type,
            catch_rate,
            weight,
            gender_ratio,
            evolution: None,
        })
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set evolution data
    pub fn evolution(mut self, evolution: Evolution) -> Self {
        self.evolution = Some(evolution);
        self
    }

    /// Snapshot of this profile at another level.
    pub fn with_level(&self, level: u8) -> Result<Self> {
        validate_level(level)?;
        Ok(Self {
            level,
            ..self.clone()
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn dex_no(&self) -> u16 {
        self.dex_no
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn base_stats(&self) -> &BaseStats {
        &self.base_stats
    }

    pub fn primary_type(&self) -> Type {
        self.primary_type
    }

    pub fn secondary_type(&self) -> Option<Type> {
        self.secondary_type
    }

    /// Iterate over the one or two types.
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        std::iter::once(self.primary_type).chain(self.secondary_type)
    }

    pub fn has_type(&self, ty: Type) -> bool {
        self.types().any(|t| t == ty)
    }

    /// Species base catch rate (0-255).
    pub fn catch_rate(&self) -> u8 {
        self.catch_rate
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn gender_ratio(&self) -> u8 {
        self.gender_ratio
    }

    /// False for genderless species.
    pub fn has_gender(&self) -> bool {
        self.gender_ratio != GENDER_UNKNOWN
    }

    pub fn evolution_data(&self) -> Option<&Evolution> {
        self.evolution.as_ref()
    }

    /// Whether this species evolves when the given item is used on it.
    pub fn evolves_with_item(&self, item: &str) -> bool {
        self.evolution
            .as_ref()
            .and_then(|evo| evo.item.as_deref())
            .is_some_and(|evo_item| evo_item == item)
    }

    // ========================================================================
    // HP
    // ========================================================================

    /// Max HP at this level for the given HP IV (no EVs).
    ///
    /// Formula: `floor((2 * Base + IV) * Level / 100) + Level + 10`
    pub fn hp_at_iv(&self, iv: u8) -> u16 {
        let iv = iv.min(MAX_IV) as u32;
        let level = self.level as u32;
        let hp = (2 * self.base_stats.hp as u32 + iv) * level / 100 + level + 10;
        // Base HP is bounded at construction
        u16::try_from(hp).unwrap_or(u16::MAX)
    }

    /// Max HP with a 0 HP IV.
    pub fn min_hp(&self) -> u16 {
        self.hp_at_iv(0)
    }

    /// Max HP with a perfect HP IV.
    pub fn max_hp(&self) -> u16 {
        self.hp_at_iv(MAX_IV)
    }
}

/// Reject levels outside 1-100.
pub fn validate_level(level: u8) -> Result<()> {
    if (1..=LEVEL_CAP).contains(&level) {
        Ok(())
    } else {
        Err(CatchError::InvalidLevel(level))
    }
}

// ============================================================================
// Species entry
// ============================================================================

/// Level-independent species data, as stored in a catalog.
///
/// Becomes a [`CatchProfile`] only once a level is supplied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub dex_no: u16,
    #[serde(default)]
    pub name: String,
    pub base_stats: BaseStats,
    pub types: Vec<Type>,
    pub catch_rate: u8,
    pub weight: f64,
    pub gender_ratio: u8,
    #[serde(default)]
    pub evolution: Option<Evolution>,
}

impl SpeciesEntry {
    /// Profile of this species at the given level.
    pub fn at_level(self, level: u8) -> Result<CatchProfile> {
        let mut profile = CatchProfile::new(
            self.dex_no,
            level,
            self.base_stats,
            &self.types,
            self.catch_rate,
            self.weight,
            self.gender_ratio,
        )?
        .named(self.name);
        profile.evolution = self.evolution;
        Ok(profile)
    }
}

impl From<CatchProfile> for SpeciesEntry {
    fn from(profile: CatchProfile) -> Self {
        let types = profile.types().collect();
        Self {
            dex_no: profile.dex_no,
            name: profile.name,
            base_stats: profile.base_stats,
            types,
            catch_rate: profile.catch_rate,
            weight: profile.weight,
            gender_ratio: profile.gender_ratio,
            evolution: profile.evolution,
        }
    }
}

// ============================================================================
// Serde representation
// ============================================================================

/// Wire shape of a profile: a species entry plus a required level.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ProfileData {
    level: u8,
    #[serde(flatten)]
    species: SpeciesEntry,
}

impl TryFrom<ProfileData> for CatchProfile {
    type Error = CatchError;

    fn try_from(data: ProfileData) -> Result<Self> {
        data.species.at_level(data.level)
    }
}

impl From<CatchProfile> for ProfileData {
    fn from(profile: CatchProfile) -> Self {
        Self {
            level: profile.level,
            species: profile.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wobbuffet(level: u8) -> CatchProfile {
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
    }

    #[test]
    fn test_level_validation() {
        assert!(wobbuffet(1).with_level(100).is_ok());
        assert_eq!(
            wobbuffet(50).with_level(0),
            Err(CatchError::InvalidLevel(0))
        );
        assert_eq!(
            wobbuffet(50).with_level(101),
            Err(CatchError::InvalidLevel(101))
        );
    }

    #[test]
    fn test_type_count_validation() {
        let stats = BaseStats::default();
        assert_eq!(
            CatchProfile::new(1, 5, stats, &[], 45, 6.9, 31).unwrap_err(),
            CatchError::InvalidTypeCount(0)
        );
        assert_eq!(
            CatchProfile::new(1, 5, stats, &[Type::Grass, Type::Poison, Type::Bug], 45, 6.9, 31)
                .unwrap_err(),
            CatchError::InvalidTypeCount(3)
        );

        // Duplicate type collapses to mono-type
        let mono = CatchProfile::new(1, 5, stats, &[Type::Fire, Type::Fire], 45, 8.5, 31).unwrap();
        assert_eq!(mono.secondary_type(), None);
        assert_eq!(mono.types().count(), 1);
    }

    #[test]
    fn test_hp_by_iv() {
        // floor((380 + 0) * 50 / 100) + 60 = 250
        assert_eq!(wobbuffet(50).min_hp(), 250);
        // floor((380 + 31) * 50 / 100) + 60 = 265
        assert_eq!(wobbuffet(50).max_hp(), 265);
        // IVs above 31 are capped
        assert_eq!(wobbuffet(50).hp_at_iv(200), 265);
        // Level 1: floor(380 / 100) + 11 = 14
        assert_eq!(wobbuffet(1).min_hp(), 14);
    }

    #[test]
    fn test_evolution_item() {
        let clefairy = CatchProfile::new(
            35,
            10,
            BaseStats::new(70, 45, 48, 60, 65, 35),
            &[Type::Fairy],
            150,
            7.5,
            191,
        )
        .unwrap()
        .evolution(Evolution {
            method: "Use Item".into(),
            level: None,
            species: "Clefable".into(),
            item: Some("Moon Stone".into()),
        });

        assert!(clefairy.evolves_with_item("Moon Stone"));
        assert!(!clefairy.evolves_with_item("Sun Stone"));
        assert!(!wobbuffet(10).evolves_with_item("Moon Stone"));
    }

    #[test]
    fn test_with_level_keeps_everything_else() {
        let base = wobbuffet(10).named("Wobbuffet");
        let moved = base.with_level(60).unwrap();
        assert_eq!(moved.level(), 60);
        assert_eq!(moved.name(), "Wobbuffet");
        assert_eq!(moved.catch_rate(), base.catch_rate());
        assert_eq!(base.level(), 10);
    }

    #[test]
    fn test_base_hp_bound() {
        let stats = |hp| BaseStats::new(hp, 50, 50, 50, 50, 50);

        let edge = CatchProfile::new(1, 100, stats(MAX_BASE_HP), &[Type::Normal], 45, 10.0, 127)
            .unwrap();
        // 2 * 32697 + 31 + 110 = 65535
        assert_eq!(edge.max_hp(), u16::MAX);
        assert_eq!(edge.min_hp(), u16::MAX - 31);

        assert_eq!(
            CatchProfile::new(1, 100, stats(MAX_BASE_HP + 1), &[Type::Normal], 45, 10.0, 127),
            Err(CatchError::BaseHpOutOfRange(MAX_BASE_HP + 1))
        );
        assert_eq!(
            CatchProfile::new(1, 100, stats(40_000), &[Type::Normal], 45, 10.0, 127),
            Err(CatchError::BaseHpOutOfRange(40_000))
        );
    }

    #[test]
    fn test_deserialize_requires_level() {
        let json = r#"{
            "dex_no": 202,
            "name": "Wobbuffet",
            "base_stats": {"hp": 190, "attack": 33, "defense": 58,
                           "special_attack": 33, "special_defense": 58, "speed": 33},
            "types": ["psychic"],
            "catch_rate": 45,
            "weight": 28.5,
            "gender_ratio": 127
        }"#;

        let err = serde_json::from_str::<CatchProfile>(json).unwrap_err();
        assert!(err.to_string().contains("level"), "{err}");

        // The same record is a valid catalog entry
        let entry: SpeciesEntry = serde_json::from_str(json).unwrap();
        let profile = entry.at_level(50).unwrap();
        assert_eq!(profile, wobbuffet(50).named("Wobbuffet"));
        assert_eq!(
            SpeciesEntry::from(profile).at_level(0),
            Err(CatchError::InvalidLevel(0))
        );
    }

    #[test]
    fn test_profile_json_round_trip() {
        let profile = wobbuffet(50).named("Wobbuffet");
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains(r#""level":50"#));
        assert_eq!(serde_json::from_str::<CatchProfile>(&json).unwrap(), profile);
    }
}
