//! Out-of-bounds time accumulation.

use chrono::{DateTime, Utc};

use crate::models::{seconds_between, FlyZone, TelemetryLog};
use crate::spatial::position_in_zones;

/// Reported seconds spent outside every fly zone, for one flight period's
/// telemetry.
///
/// Sums the timestamp gaps between consecutive out-of-bounds samples; an
/// in-bounds sample closes the current run. Only reported time counts, so a
/// lone out-of-bounds sample between in-bounds neighbors contributes
/// nothing and no time is interpolated at the boundary crossing itself.
pub fn out_of_bounds_time_secs(zones: &[FlyZone], logs: &[TelemetryLog]) -> f64 {
    let mut total_secs = 0.0;
    let mut run_latest: Option<DateTime<Utc>> = None;

    for log in logs {
        if position_in_zones(&log.position, zones) {
            run_latest = None;
        } else {
            if let Some(prev) = run_latest {
                total_secs += seconds_between(prev, log.timestamp);
            }
            run_latest = Some(log.timestamp);
        }
    }
    total_secs
}
