//! Catch probability calculator.
//!
//! Loads a target profile from JSON and prints the capture odds of every
//! Poké Ball scenario that can apply to it.
//!
//! Usage:
//!   cargo run -p catch_cli -- calc --profile profiles/wobbuffet.json --level 50
//!   cargo run -p catch_cli -- calc --profile profiles/wobbuffet.json --status asleep --json
//!   cargo run -p catch_cli -- scenarios --profile profiles/clefairy.json --all

mod cmd;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::{calc, scenarios};

#[derive(Parser)]
#[command(name = "catch_cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate capture odds for every feasible scenario
    Calc(calc::CalcArgs),

    /// List the scenario catalog for a target
    Scenarios(scenarios::ScenariosArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Calc(args)) => calc::execute(args),
        Some(Commands::Scenarios(args)) => scenarios::execute(args),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
