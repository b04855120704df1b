//! Fixture data structures for catch calculation tests.
//!
//! These types are deserialized from `tests/fixtures/catch_rates.json`.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use catch_engine::{GameContext, HpIv, HpPreset, SpeciesEntry, Status};
use serde::Deserialize;

/// Root structure for the catch fixture file.
#[derive(Deserialize)]
pub struct CatchFixture {
    #[allow(dead_code)]
    pub meta: Option<serde_json::Value>,
    /// Species by key; each case supplies the level
    pub profiles: BTreeMap<String, SpeciesEntry>,
    pub cases: Vec<CatchTestCase>,
}

/// A single calculation: one target, one context, every feasible scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct CatchTestCase {
    pub id: String,
    pub profile: String,
    pub level: u8,
    pub iv: HpIv,
    pub hp: HpPreset,
    /// Derived max HP, checked before the calculation runs
    pub max_hp: u16,
    pub current_hp: u16,
    pub status: Option<Status>,
    pub catching_power: u8,
    pub backstrike: bool,
    pub game: GameContext,
    pub expected: Vec<ExpectedResult>,
}

/// Expected output for one scenario, in catalog order.
#[derive(Deserialize, Debug, Clone)]
pub struct ExpectedResult {
    pub ball: String,
    pub condition: Option<String>,
    pub base_rate: i64,
    pub modified_catch_rate: i64,
    pub critical_value: i64,
    pub catch_probability: f64,
}

/// Path to a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load and parse `catch_rates.json`.
pub fn load_catch_fixture() -> CatchFixture {
    let path = fixture_path("catch_rates.json");
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    serde_json::from_reader(BufReader::new(file)).expect("Failed to parse catch_rates.json")
}
