//! Input and output plumbing shared by the judge CLI bins.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use judge_core::{
    CompetitorLogs, EvalError, EvaluationReport, FlyZone, MissionConfig, MovingObstacle,
    StationaryObstacle, TeamEvaluation, TimesBetween,
};

/// Everything one evaluation consumes, bundled as a single JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationInput {
    pub mission: MissionConfig,
    #[serde(default)]
    pub fly_zones: Vec<FlyZone>,
    #[serde(default)]
    pub stationary_obstacles: Vec<StationaryObstacle>,
    #[serde(default)]
    pub moving_obstacles: Vec<MovingObstacle>,
    pub teams: Vec<CompetitorLogs>,
}

/// Read and parse an evaluation bundle from disk.
pub fn load_input(path: &Path) -> Result<EvaluationInput> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let input: EvaluationInput =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(input)
}

/// One report entry as written to JSON: scored teams carry their full
/// record, unscorable teams carry the error text.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TeamReportJson {
    Evaluated(TeamEvaluation),
    Failed { error: String },
}

/// Flatten a report into its JSON form, keyed by username.
pub fn report_to_json(report: &EvaluationReport) -> BTreeMap<String, TeamReportJson> {
    report
        .teams
        .iter()
        .map(|(username, outcome)| {
            let entry = match outcome {
                Ok(eval) => TeamReportJson::Evaluated(eval.clone()),
                Err(err) => TeamReportJson::Failed {
                    error: err.to_string(),
                },
            };
            (username.clone(), entry)
        })
        .collect()
}

/// One line per team for the operator-facing summary.
pub fn team_summary(username: &str, outcome: &Result<TeamEvaluation, EvalError>) -> String {
    match outcome {
        Err(err) => format!("{username}: not scored ({err})"),
        Ok(eval) => {
            let hit = eval.waypoints_satisfied.values().filter(|&&hit| hit).count();
            let total = eval.waypoints_satisfied.len();
            let collisions = eval
                .stationary_obst_collision
                .values()
                .chain(eval.moving_obst_collision.values())
                .filter(|&&hit| hit)
                .count();
            format!(
                "{username}: waypoints {hit}/{total}, out of bounds {:.1}s, telemetry gap {}, collisions {collisions}",
                eval.out_of_bounds_time_secs,
                gap_text(&eval.interop_times.uas_telem),
            )
        }
    }
}

fn gap_text(times: &Option<TimesBetween>) -> String {
    match times {
        Some(times) => format!("{:.1}s max / {:.1}s avg", times.max_secs, times.avg_secs),
        None => "no data".to_string(),
    }
}
