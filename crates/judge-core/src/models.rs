//! Core data models shared across the evaluation pipeline.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// A WGS-84 surface position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A surface position plus altitude above mean sea level, in feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AerialPosition {
    #[serde(flatten)]
    pub gps: GpsPosition,
    pub altitude_msl_ft: f64,
}

impl AerialPosition {
    pub fn new(latitude: f64, longitude: f64, altitude_msl_ft: f64) -> Self {
        Self {
            gps: GpsPosition::new(latitude, longitude),
            altitude_msl_ft,
        }
    }
}

/// A mission waypoint with its 1-based position along the planned path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub order: u32,
    pub position: AerialPosition,
}

/// A closed time interval, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimePeriod {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether `t` falls inside the period. Both boundaries count.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t <= self.end
    }
}

/// One telemetry report downlinked by a UAS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryLog {
    pub timestamp: DateTime<Utc>,
    pub position: AerialPosition,
    pub heading_deg: f64,
}

impl TelemetryLog {
    /// Whether `other` reports the exact same position and heading.
    pub fn duplicate_of(&self, other: &TelemetryLog) -> bool {
        self.position == other.position && self.heading_deg == other.heading_deg
    }
}

/// Whether a flight event marks leaving or returning to the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightEventKind {
    Takeoff,
    Landing,
}

/// A judge-recorded takeoff or landing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: FlightEventKind,
}

impl FlightEvent {
    pub fn new(timestamp: DateTime<Utc>, kind: FlightEventKind) -> Self {
        Self { timestamp, kind }
    }
}

/// One timestamped request against a required interop interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessEvent {
    pub timestamp: DateTime<Utc>,
}

/// An approved flight volume: a polygon footprint with an altitude band.
///
/// The boundary is an ordered ring of vertices; the closing edge back to the
/// first vertex is implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyZone {
    pub boundary: Vec<GpsPosition>,
    pub altitude_msl_min_ft: f64,
    pub altitude_msl_max_ft: f64,
}

/// A ground-fixed cylindrical obstacle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationaryObstacle {
    pub id: u32,
    pub position: GpsPosition,
    pub cylinder_radius_ft: f64,
    pub cylinder_height_ft: f64,
}

/// One sampled point along a moving obstacle's trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub timestamp: DateTime<Utc>,
    pub position: AerialPosition,
    pub sphere_radius_ft: f64,
}

/// A spherical obstacle following a time-ordered trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingObstacle {
    pub id: u32,
    pub trajectory: Vec<TrajectorySample>,
}

/// A registered account. Administrators are never scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub username: String,
    #[serde(default)]
    pub is_administrator: bool,
}

/// Everything recorded for one competitor during the mission window.
///
/// All streams are expected in ascending timestamp order, the order the
/// interop server logged them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorLogs {
    pub competitor: Competitor,
    #[serde(default)]
    pub flight_events: Vec<FlightEvent>,
    #[serde(default)]
    pub telemetry: Vec<TelemetryLog>,
    #[serde(default)]
    pub server_info_events: Vec<AccessEvent>,
    #[serde(default)]
    pub obstacle_events: Vec<AccessEvent>,
}

/// The mission definition teams are scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub home_pos: GpsPosition,
    pub waypoint_dist_max_ft: f64,
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub search_grid_points: Vec<Waypoint>,
    pub emergent_last_known_pos: GpsPosition,
    pub off_axis_target_pos: GpsPosition,
    pub sric_pos: GpsPosition,
    pub ir_primary_target_pos: GpsPosition,
    pub ir_secondary_target_pos: GpsPosition,
    pub air_drop_pos: GpsPosition,
}

fn default_active() -> bool {
    true
}

impl MissionConfig {
    /// Check the configuration invariants evaluation depends on: at least
    /// one waypoint, and no repeated waypoint order.
    pub fn validate(&self) -> Result<(), EvalError> {
        if self.waypoints.is_empty() {
            return Err(EvalError::NoWaypoints);
        }
        let mut seen = HashSet::new();
        for waypoint in &self.waypoints {
            if !seen.insert(waypoint.order) {
                return Err(EvalError::DuplicateWaypointOrder(waypoint.order));
            }
        }
        Ok(())
    }
}

/// Elapsed seconds from `from` to `to`, at millisecond precision.
pub(crate) fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}
