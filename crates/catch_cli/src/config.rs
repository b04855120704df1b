//! Save-progress configuration.
//!
//! Resolved in order, later sources winning: built-in defaults, an optional
//! TOML file, `CATCH_*` environment variables, then command line flags.

use std::env;
use std::fs;
use std::path::Path;

use catch_engine::GameContext;
use serde::Deserialize;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("Set either `registered` or a [dex] table, not both")]
    ConflictingRegistered,
}

/// Per-region Pokédex progress; the registered count is the sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DexProgress {
    /// 0-400
    pub paldea: u16,
    /// 0-200
    pub kitakami: u16,
    /// 0-243
    pub blueberry: u16,
}

impl DexProgress {
    pub fn registered(&self) -> u16 {
        self.paldea
            .saturating_add(self.kitakami)
            .saturating_add(self.blueberry)
    }
}

/// On-disk shape of the TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    badges: Option<u8>,
    registered: Option<u16>,
    catching_charm: Option<bool>,
    dex: Option<DexProgress>,
}

/// Player progress that feeds [`GameContext`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Gym badges earned (0-8)
    pub badges: u8,
    /// Species registered in the Pokédex
    pub registered: u16,
    /// Whether the Catching Charm is owned
    pub catching_charm: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        let ctx = GameContext::default();
        Self {
            badges: ctx.badges,
            registered: ctx.registered,
            catching_charm: ctx.catching_charm,
        }
    }
}

impl GameConfig {
    /// Load a TOML file. Missing keys keep their defaults.
    pub fn load_toml(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse TOML content over the defaults.
    ///
    /// The registered count comes from `registered` or from a `[dex]` table
    /// of per-region progress, never both.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let registered = match (file.registered, file.dex) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingRegistered),
            (Some(registered), None) => Some(registered),
            (None, Some(dex)) => Some(dex.registered()),
            (None, None) => None,
        };

        let mut config = Self::default();
        if let Some(badges) = file.badges {
            config.badges = badges;
        }
        if let Some(registered) = registered {
            config.registered = registered;
        }
        if let Some(charm) = file.catching_charm {
            config.catching_charm = charm;
        }
        Ok(config)
    }

    /// Apply environment overrides.
    ///
    /// Environment variables:
    /// - `CATCH_BADGES` - Badges earned
    /// - `CATCH_REGISTERED` - Registered species count
    /// - `CATCH_CHARM` - Catching Charm owned (`true`/`false`)
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| env::var(key).ok())
    }

    fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(badges) = parse_var(&lookup, "CATCH_BADGES")? {
            self.badges = badges;
        }
        if let Some(registered) = parse_var(&lookup, "CATCH_REGISTERED")? {
            self.registered = registered;
        }
        if let Some(charm) = parse_var(&lookup, "CATCH_CHARM")? {
            self.catching_charm = charm;
        }
        Ok(())
    }

    /// Apply explicit flag values. `charm` can only switch the charm on.
    pub fn apply_flags(&mut self, badges: Option<u8>, registered: Option<u16>, charm: bool) {
        if let Some(badges) = badges {
            self.badges = badges;
        }
        if let Some(registered) = registered {
            self.registered = registered;
        }
        self.catching_charm |= charm;
    }

    pub fn to_context(&self) -> GameContext {
        GameContext::new(self.badges, self.registered, self.catching_charm)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value }),
        None => Ok(None),
    }
}
