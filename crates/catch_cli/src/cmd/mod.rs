pub mod calc;
pub mod scenarios;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use catch_engine::{CatchProfile, SpeciesEntry};
use clap::Args;
use serde::Deserialize;

/// Target selection shared by every subcommand.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Path to a profile JSON file
    #[arg(short, long)]
    pub profile: PathBuf,

    /// Target level (overrides the level in the file, required if it has none)
    #[arg(short, long)]
    pub level: Option<u8>,
}

/// A profile file: a species entry with an optional level.
#[derive(Deserialize)]
struct ProfileFile {
    level: Option<u8>,
    #[serde(flatten)]
    species: SpeciesEntry,
}

impl ProfileFile {
    /// Resolve to a profile, with `level` taking precedence over the file.
    fn into_profile(self, level: Option<u8>) -> Result<CatchProfile> {
        let level = level
            .or(self.level)
            .ok_or_else(|| anyhow!("No level in profile; pass --level"))?;
        Ok(self.species.at_level(level)?)
    }
}

impl ProfileArgs {
    /// Load the profile and move it to the requested level.
    pub fn load(&self) -> Result<CatchProfile> {
        let file = File::open(&self.profile)
            .with_context(|| format!("Failed to open {}", self.profile.display()))?;
        let data: ProfileFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse {}", self.profile.display()))?;
        let profile = data
            .into_profile(self.level)
            .with_context(|| format!("Invalid profile {}", self.profile.display()))?;

        tracing::info!(
            dex_no = profile.dex_no(),
            name = profile.name(),
            level = profile.level(),
            "Loaded profile"
        );
        Ok(profile)
    }
}

/// Format a probability as a percentage with two decimals.
pub fn percent(odds: f64) -> String {
    format!("{:.2}%", odds * 100.0)
}
