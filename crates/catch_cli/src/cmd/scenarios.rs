use anyhow::Result;
use catch_engine::{enumerate_scenarios, generate_scenarios, CatchScenario};
use clap::Args;

use super::ProfileArgs;

#[derive(Args, Debug)]
pub struct ScenariosArgs {
    #[command(flatten)]
    pub target: ProfileArgs,

    /// Include branches that cannot apply to this target
    #[arg(long)]
    pub all: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ScenariosArgs) -> Result<()> {
    let profile = args.target.load()?;

    let scenarios = if args.all {
        enumerate_scenarios(&profile)
    } else {
        generate_scenarios(&profile)
    };
    tracing::info!(scenarios = scenarios.len(), all = args.all, "Built catalog");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scenarios)?);
        return Ok(());
    }

    println!(
        "{:<14} {:>6} {:<66} {}",
        "Poké Ball", "Rate", "Condition", "Requires"
    );
    for scenario in &scenarios {
        print_row(scenario, args.all);
    }
    Ok(())
}

fn print_row(scenario: &CatchScenario, show_feasibility: bool) {
    let marker = if show_feasibility && !scenario.is_possible {
        " (impossible)"
    } else {
        ""
    };
    let requires = if scenario.requires.is_empty() {
        String::from("-")
    } else {
        scenario
            .requires
            .iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!(
        "{:<14} {:>5.2}x {:<66} {}{}",
        scenario.ball.name(),
        scenario.multiplier(),
        scenario.condition.as_deref().unwrap_or(""),
        requires,
        marker,
    );
}
