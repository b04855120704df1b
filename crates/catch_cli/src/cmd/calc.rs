use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use catch_engine::{
    calculate_catch_rates, par_calculate_catch_rates, sort_for_display, trim_timer_tiers,
    BattleContext, CatchProfile, CatchResult, CatchingPower, HpIv, HpPreset, Status,
};
use clap::{Args, ValueEnum};

use super::{percent, ProfileArgs};
use crate::config::GameConfig;

#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub target: ProfileArgs,

    /// HP IV used to derive max HP
    #[arg(long, value_enum, default_value_t = IvArg::Min)]
    pub iv: IvArg,

    /// Current HP: exact, red, yellow, green or a number
    #[arg(long, default_value = "exact")]
    pub hp: HpArg,

    /// Status condition (asleep, frozen, burned, paralyzed, poisoned)
    #[arg(short, long, value_parser = parse_status)]
    pub status: Option<Status>,

    /// Catching Power level (0-3)
    #[arg(long, default_value_t = 0)]
    pub power: u8,

    /// Target was engaged from behind
    #[arg(long)]
    pub backstrike: bool,

    /// Gym badges earned
    #[arg(long)]
    pub badges: Option<u8>,

    /// Species registered in the Pokédex
    #[arg(long)]
    pub registered: Option<u16>,

    /// Catching Charm owned
    #[arg(long)]
    pub charm: bool,

    /// TOML file with badges, registered (or a [dex] table) and catching_charm
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Evaluate scenarios on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Keep Timer Ball tiers past the first certain one
    #[arg(long)]
    pub all_timer_tiers: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum IvArg {
    Min,
    Max,
}

impl From<IvArg> for HpIv {
    fn from(iv: IvArg) -> Self {
        match iv {
            IvArg::Min => HpIv::Min,
            IvArg::Max => HpIv::Max,
        }
    }
}

/// Current HP as a bar preset or an exact value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HpArg {
    Preset(HpPreset),
    Exact(u16),
}

impl FromStr for HpArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "one" | "1hp" => Ok(HpArg::Preset(HpPreset::ExactlyOne)),
            "red" => Ok(HpArg::Preset(HpPreset::RedBar)),
            "yellow" => Ok(HpArg::Preset(HpPreset::YellowBar)),
            "green" | "full" => Ok(HpArg::Preset(HpPreset::GreenBar)),
            other => other
                .parse()
                .map(HpArg::Exact)
                .map_err(|_| format!("invalid HP {other:?}: expected exact, red, yellow, green or a number")),
        }
    }
}

fn parse_status(s: &str) -> Result<Status, String> {
    Status::try_from(s).map_err(|e| e.to_string())
}

pub fn execute(args: CalcArgs) -> Result<()> {
    let profile = args.target.load()?;
    let battle = build_battle(&profile, &args)?;
    let game = resolve_game_config(&args)?.to_context();

    tracing::info!(
        max_hp = battle.max_hp(),
        current_hp = battle.current_hp(),
        badges = game.badges,
        registered = game.registered,
        charm = game.catching_charm,
        "Calculating"
    );

    let mut results = if args.parallel {
        tracing::info!("Evaluating scenarios in parallel");
        par_calculate_catch_rates(&profile, &battle, &game)?
    } else {
        calculate_catch_rates(&profile, &battle, &game)?
    };
    tracing::info!(scenarios = results.len(), "Evaluated");

    if !args.all_timer_tiers {
        let before = results.len();
        trim_timer_tiers(&mut results);
        if results.len() < before {
            tracing::info!(dropped = before - results.len(), "Trimmed Timer Ball tiers");
        }
    }
    sort_for_display(&mut results);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&profile, &results);
    }
    Ok(())
}

fn build_battle(profile: &CatchProfile, args: &CalcArgs) -> Result<BattleContext> {
    let iv = HpIv::from(args.iv);
    let battle = match args.hp {
        HpArg::Preset(preset) => BattleContext::for_profile(profile, iv, preset),
        HpArg::Exact(current) => {
            let max_hp = BattleContext::for_profile(profile, iv, HpPreset::GreenBar).max_hp();
            BattleContext::new(max_hp, current)?
        }
    };

    Ok(battle
        .status(args.status)
        .backstrike(args.backstrike)
        .catching_power(CatchingPower::new(args.power)?))
}

fn resolve_game_config(args: &CalcArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading game config");
            GameConfig::load_toml(path)?
        }
        None => GameConfig::default(),
    };
    config.apply_env()?;
    config.apply_flags(args.badges, args.registered, args.charm);
    Ok(config)
}

fn print_table(profile: &CatchProfile, results: &[CatchResult]) {
    let title = if profile.name().is_empty() {
        format!("#{} Lv. {}", profile.dex_no(), profile.level())
    } else {
        format!("{} Lv. {}", profile.name(), profile.level())
    };
    println!("{title}");
    println!(
        "{:<14} {:<66} {:>9} {:>8} {:>8} {:>8}",
        "Poké Ball", "Condition", "Rate", "Crit", "By crit", "Catch"
    );

    for result in results {
        let odds = result.odds();
        println!(
            "{:<14} {:<66} {:>9} {:>8} {:>8} {:>8}",
            result.ball.name(),
            result.condition.as_deref().unwrap_or(""),
            result.modified_catch_rate,
            percent(odds.critical),
            percent(odds.with_critical()),
            percent(result.catch_probability),
        );
    }
}
