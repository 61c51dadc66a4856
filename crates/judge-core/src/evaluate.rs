//! The per-competitor evaluation pipeline.

use chrono::{DateTime, Utc};

use crate::boundary;
use crate::collision::{self, Obstacle};
use crate::error::EvalError;
use crate::flights;
use crate::models::{
    CompetitorLogs, FlyZone, MissionConfig, MovingObstacle, StationaryObstacle, TelemetryLog,
};
use crate::rates;
use crate::report::{EvaluationReport, InteropTimes, TeamEvaluation};
use crate::telemetry;
use crate::waypoints;

/// Runs the scoring pipeline for every competitor against one shared set of
/// mission reference data.
pub struct MissionEvaluator<'a> {
    mission: &'a MissionConfig,
    fly_zones: &'a [FlyZone],
    stationary_obstacles: &'a [StationaryObstacle],
    moving_obstacles: &'a [MovingObstacle],
}

impl<'a> MissionEvaluator<'a> {
    pub fn new(
        mission: &'a MissionConfig,
        fly_zones: &'a [FlyZone],
        stationary_obstacles: &'a [StationaryObstacle],
        moving_obstacles: &'a [MovingObstacle],
    ) -> Self {
        Self {
            mission,
            fly_zones,
            stationary_obstacles,
            moving_obstacles,
        }
    }

    /// Evaluate every non-administrator competitor.
    ///
    /// A mission configuration problem fails the whole evaluation. A data
    /// problem in one competitor's logs is recorded as that competitor's
    /// entry and the rest of the field is still scored. Competitors with no
    /// recorded flights still get a fully populated entry.
    pub fn evaluate_teams(
        &self,
        teams: &[CompetitorLogs],
    ) -> Result<EvaluationReport, EvalError> {
        self.mission.validate()?;

        tracing::info!("Starting team evaluations");
        let mut report = EvaluationReport::default();
        for logs in teams {
            if logs.competitor.is_administrator {
                continue;
            }
            tracing::debug!("Evaluating team {}", logs.competitor.username);
            let outcome = self.evaluate_team(logs);
            if let Err(err) = &outcome {
                tracing::warn!(
                    "Could not evaluate team {}: {}",
                    logs.competitor.username,
                    err
                );
            }
            report.teams.insert(logs.competitor.username.clone(), outcome);
        }
        Ok(report)
    }

    fn evaluate_team(&self, logs: &CompetitorLogs) -> Result<TeamEvaluation, EvalError> {
        let periods = flights::flight_periods(&logs.flight_events)?;
        let period_logs = telemetry::dedupe(telemetry::by_time_period(&logs.telemetry, &periods));
        let flight_logs: Vec<TelemetryLog> = period_logs.iter().flatten().cloned().collect();

        let waypoints_satisfied = waypoints::satisfied_waypoints(
            &self.mission.waypoints,
            self.mission.waypoint_dist_max_ft,
            &flight_logs,
        );

        // Accumulated per period, so ground time between flights never
        // bridges two excursions.
        let out_of_bounds_time_secs: f64 = period_logs
            .iter()
            .map(|bucket| boundary::out_of_bounds_time_secs(self.fly_zones, bucket))
            .sum();

        let interop_times = InteropTimes {
            server_info: rates::access_rates(&logs.server_info_events, &periods),
            obst_info: rates::access_rates(&logs.obstacle_events, &periods),
            uas_telem: rates::times_between(&telemetry_timestamps(&period_logs)),
        };

        let stationary_obst_collision = collision::collisions(
            self.stationary_obstacles.iter().map(Obstacle::Stationary),
            &flight_logs,
        );
        let moving_obst_collision = collision::collisions(
            self.moving_obstacles.iter().map(Obstacle::Moving),
            &flight_logs,
        );

        Ok(TeamEvaluation {
            waypoints_satisfied,
            out_of_bounds_time_secs,
            interop_times,
            stationary_obst_collision,
            moving_obst_collision,
        })
    }
}

fn telemetry_timestamps(period_logs: &[Vec<TelemetryLog>]) -> Vec<Vec<DateTime<Utc>>> {
    period_logs
        .iter()
        .map(|bucket| bucket.iter().map(|log| log.timestamp).collect())
        .collect()
}
