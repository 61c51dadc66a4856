//! Waypoint satisfaction checks.

use std::collections::BTreeMap;

use crate::models::{TelemetryLog, Waypoint};

/// Decide, for each waypoint, whether any telemetry sample came strictly
/// within `dist_max_ft` of it in three dimensions.
///
/// This is a coverage check, not a sequencing check: waypoints may be
/// satisfied in any order, and one sample can satisfy several waypoints.
/// The returned map is keyed by waypoint order, ascending.
pub fn satisfied_waypoints(
    waypoints: &[Waypoint],
    dist_max_ft: f64,
    logs: &[TelemetryLog],
) -> BTreeMap<u32, bool> {
    waypoints
        .iter()
        .map(|waypoint| {
            let satisfied = logs
                .iter()
                .any(|log| log.position.distance_to(&waypoint.position) < dist_max_ft);
            (waypoint.order, satisfied)
        })
        .collect()
}
