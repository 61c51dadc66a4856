//! Core scoring engine for UAS competition mission evaluation.
//!
//! Takes the logs the interop server recorded during a mission (flight
//! events, telemetry downlink, interface access logs) plus the mission
//! definition, and produces an objective per-team report: waypoint
//! satisfaction, time out of bounds, interop gap statistics, and obstacle
//! collisions. Evaluation is deterministic: the same inputs produce the
//! same report whatever order teams, waypoints, or obstacles arrive in.

pub mod boundary;
pub mod collision;
pub mod error;
pub mod evaluate;
pub mod flights;
pub mod models;
pub mod rates;
pub mod report;
pub mod spatial;
pub mod telemetry;
pub mod waypoints;

pub use collision::Obstacle;
pub use error::EvalError;
pub use evaluate::MissionEvaluator;
pub use models::{
    AccessEvent, AerialPosition, Competitor, CompetitorLogs, FlightEvent, FlightEventKind,
    FlyZone, GpsPosition, MissionConfig, MovingObstacle, StationaryObstacle, TelemetryLog,
    TimePeriod, TrajectorySample, Waypoint,
};
pub use rates::TimesBetween;
pub use report::{EvaluationReport, InteropTimes, TeamEvaluation};
pub use spatial::position_in_zones;
