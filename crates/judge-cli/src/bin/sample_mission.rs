//! Write a small, deterministic evaluation bundle for trying out the judge.
//!
//! The bundle holds three accounts: a team that flies the mission cleanly,
//! a team that climbs out of the altitude band and detours through a tower,
//! and an administrator whose logs must be skipped. Running
//! `evaluate_mission` on the output exercises every part of the report.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use judge_cli::EvaluationInput;
use judge_core::{
    AccessEvent, AerialPosition, Competitor, CompetitorLogs, FlightEvent, FlightEventKind,
    FlyZone, GpsPosition, MissionConfig, MovingObstacle, StationaryObstacle, TelemetryLog,
    TrajectorySample, Waypoint,
};

const FIELD_LAT: f64 = 33.6846;
const FIELD_LON: f64 = -117.8265;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a sample evaluation bundle")]
struct Args {
    /// Where to write the bundle
    #[arg(long, default_value = "sample_mission.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sample_mission=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let base = DateTime::parse_from_rfc3339("2024-06-19T14:00:00Z")
        .context("parsing bundle base time")?
        .with_timezone(&Utc);

    let input = sample_input(base);
    let rendered = serde_json::to_string_pretty(&input)?;
    fs::write(&args.output, rendered)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!("Sample bundle written to {}", args.output.display());
    Ok(())
}

fn sample_input(base: DateTime<Utc>) -> EvaluationInput {
    EvaluationInput {
        mission: mission(),
        fly_zones: vec![flight_zone()],
        stationary_obstacles: vec![tower()],
        moving_obstacles: vec![patrol_obstacle(base)],
        teams: vec![
            clean_team(base, "alpha"),
            excursion_team(base, "bravo"),
            administrator(base, "charlie"),
        ],
    }
}

fn at(base: DateTime<Utc>, secs: u32) -> DateTime<Utc> {
    base + Duration::seconds(i64::from(secs))
}

/// Three waypoints strung north of the field at 200 ft, 100 ft threshold.
fn mission() -> MissionConfig {
    let field = GpsPosition::new(FIELD_LAT, FIELD_LON);
    let waypoints = (1..=3)
        .map(|order| Waypoint {
            order,
            position: AerialPosition::new(
                FIELD_LAT + 0.001 * f64::from(order),
                FIELD_LON,
                200.0,
            ),
        })
        .collect();
    MissionConfig {
        is_active: true,
        home_pos: field,
        waypoint_dist_max_ft: 100.0,
        waypoints,
        search_grid_points: Vec::new(),
        emergent_last_known_pos: GpsPosition::new(FIELD_LAT + 0.004, FIELD_LON - 0.002),
        off_axis_target_pos: GpsPosition::new(FIELD_LAT - 0.002, FIELD_LON - 0.004),
        sric_pos: GpsPosition::new(FIELD_LAT + 0.002, FIELD_LON - 0.003),
        ir_primary_target_pos: GpsPosition::new(FIELD_LAT + 0.001, FIELD_LON + 0.002),
        ir_secondary_target_pos: GpsPosition::new(FIELD_LAT + 0.003, FIELD_LON + 0.002),
        air_drop_pos: GpsPosition::new(FIELD_LAT, FIELD_LON + 0.001),
    }
}

fn flight_zone() -> FlyZone {
    FlyZone {
        boundary: vec![
            GpsPosition::new(FIELD_LAT - 0.01, FIELD_LON - 0.01),
            GpsPosition::new(FIELD_LAT - 0.01, FIELD_LON + 0.01),
            GpsPosition::new(FIELD_LAT + 0.01, FIELD_LON + 0.01),
            GpsPosition::new(FIELD_LAT + 0.01, FIELD_LON - 0.01),
        ],
        altitude_msl_min_ft: 0.0,
        altitude_msl_max_ft: 400.0,
    }
}

/// A tower east of the planned path; only a deliberate detour reaches it.
fn tower() -> StationaryObstacle {
    StationaryObstacle {
        id: 4,
        position: GpsPosition::new(FIELD_LAT + 0.002, FIELD_LON + 0.005),
        cylinder_radius_ft: 200.0,
        cylinder_height_ft: 300.0,
    }
}

/// A sphere sweeping south along a line offset east of the planned path.
fn patrol_obstacle(base: DateTime<Utc>) -> MovingObstacle {
    MovingObstacle {
        id: 7,
        trajectory: vec![
            TrajectorySample {
                timestamp: at(base, 0),
                position: AerialPosition::new(FIELD_LAT + 0.003, FIELD_LON + 0.003, 200.0),
                sphere_radius_ft: 150.0,
            },
            TrajectorySample {
                timestamp: at(base, 60),
                position: AerialPosition::new(FIELD_LAT, FIELD_LON + 0.003, 200.0),
                sphere_radius_ft: 150.0,
            },
        ],
    }
}

/// The planned path: northbound over all three waypoints at 200 ft.
fn path_position(secs: u32) -> AerialPosition {
    AerialPosition::new(
        FIELD_LAT + 0.003 * f64::from(secs) / 60.0,
        FIELD_LON,
        200.0,
    )
}

fn team(base: DateTime<Utc>, username: &str, telemetry: Vec<TelemetryLog>) -> CompetitorLogs {
    CompetitorLogs {
        competitor: Competitor {
            username: username.to_string(),
            is_administrator: false,
        },
        flight_events: vec![
            FlightEvent::new(at(base, 0), FlightEventKind::Takeoff),
            FlightEvent::new(at(base, 60), FlightEventKind::Landing),
        ],
        telemetry,
        server_info_events: (0..=60)
            .step_by(5)
            .map(|secs| AccessEvent {
                timestamp: at(base, secs),
            })
            .collect(),
        obstacle_events: (0..=60)
            .step_by(2)
            .map(|secs| AccessEvent {
                timestamp: at(base, secs),
            })
            .collect(),
    }
}

fn clean_team(base: DateTime<Utc>, username: &str) -> CompetitorLogs {
    let telemetry = (0..=60)
        .map(|secs| TelemetryLog {
            timestamp: at(base, secs),
            position: path_position(secs),
            heading_deg: 0.0,
        })
        .collect();
    team(base, username, telemetry)
}

/// Same plan with two deviations: a climb out of the altitude band from
/// t=20 to t=30, and an eastward detour through the tower from t=35 to
/// t=45.
fn excursion_team(base: DateTime<Utc>, username: &str) -> CompetitorLogs {
    let telemetry = (0..=60)
        .map(|secs| {
            let mut position = path_position(secs);
            if (20..=30).contains(&secs) {
                position.altitude_msl_ft = 500.0;
            }
            if (35..=45).contains(&secs) {
                position.gps.longitude = FIELD_LON + 0.005;
            }
            TelemetryLog {
                timestamp: at(base, secs),
                position,
                heading_deg: 0.0,
            }
        })
        .collect();
    team(base, username, telemetry)
}

fn administrator(base: DateTime<Utc>, username: &str) -> CompetitorLogs {
    let mut logs = clean_team(base, username);
    logs.competitor.is_administrator = true;
    logs
}
