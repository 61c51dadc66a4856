//! Score a completed mission from recorded logs.
//!
//! Reads an evaluation bundle (mission definition, fly zones, obstacles,
//! and per-team logs), prints a one-line summary per team, and writes the
//! full report as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use judge_cli::{load_input, report_to_json, team_summary};
use judge_core::MissionEvaluator;

#[derive(Parser, Debug)]
#[command(author, version, about = "Score a completed mission from recorded logs")]
struct Args {
    /// Evaluation bundle (JSON) to score
    input: PathBuf,

    /// Where to write the report JSON
    #[arg(long, default_value = "evaluation_report.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("evaluate_mission=info".parse()?)
                .add_directive("judge_core=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let input = load_input(&args.input)?;
    tracing::info!(
        "Loaded {} accounts and {} waypoints from {}",
        input.teams.len(),
        input.mission.waypoints.len(),
        args.input.display()
    );
    if !input.mission.is_active {
        tracing::warn!("Mission bundle is not marked active; evaluating anyway");
    }

    let evaluator = MissionEvaluator::new(
        &input.mission,
        &input.fly_zones,
        &input.stationary_obstacles,
        &input.moving_obstacles,
    );
    let report = evaluator.evaluate_teams(&input.teams)?;

    for (username, outcome) in &report.teams {
        println!("{}", team_summary(username, outcome));
    }

    let rendered = serde_json::to_string_pretty(&report_to_json(&report))?;
    fs::write(&args.output, rendered)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!("Report written to {}", args.output.display());
    Ok(())
}
