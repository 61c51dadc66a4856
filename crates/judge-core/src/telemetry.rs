//! Telemetry windowing and duplicate suppression.

use crate::models::{TelemetryLog, TimePeriod};

/// Split a time-ordered telemetry stream into the logs recorded during each
/// period. Period boundaries are inclusive; a period with no logs yields an
/// empty bucket so buckets always line up with periods by index.
pub fn by_time_period(logs: &[TelemetryLog], periods: &[TimePeriod]) -> Vec<Vec<TelemetryLog>> {
    periods
        .iter()
        .map(|period| {
            logs.iter()
                .filter(|log| period.contains(log.timestamp))
                .cloned()
                .collect()
        })
        .collect()
}

/// Collapse consecutive logs that report an identical position and heading,
/// keeping the first log of each run.
///
/// A ground station re-sending a stale report must not inflate time-based
/// statistics, but revisiting the same position later in the flight is a
/// genuine report and is kept.
pub fn dedupe(period_logs: Vec<Vec<TelemetryLog>>) -> Vec<Vec<TelemetryLog>> {
    period_logs.into_iter().map(dedupe_bucket).collect()
}

fn dedupe_bucket(logs: Vec<TelemetryLog>) -> Vec<TelemetryLog> {
    let mut deduped: Vec<TelemetryLog> = Vec::with_capacity(logs.len());
    for log in logs {
        let is_repeat = deduped.last().is_some_and(|prev| log.duplicate_of(prev));
        if !is_repeat {
            deduped.push(log);
        }
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AerialPosition;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, secs).unwrap()
    }

    fn log(secs: u32, latitude: f64) -> TelemetryLog {
        TelemetryLog {
            timestamp: at(secs),
            position: AerialPosition::new(latitude, -117.0, 200.0),
            heading_deg: 0.0,
        }
    }

    #[test]
    fn windows_are_inclusive_at_both_ends() {
        let logs = [log(9, 33.0), log(10, 33.1), log(20, 33.2), log(21, 33.3)];
        let periods = [TimePeriod::new(at(10), at(20))];
        let buckets = by_time_period(&logs, &periods);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0], vec![log(10, 33.1), log(20, 33.2)]);
    }

    #[test]
    fn empty_periods_yield_empty_buckets() {
        let logs = [log(5, 33.0)];
        let periods = [
            TimePeriod::new(at(0), at(10)),
            TimePeriod::new(at(20), at(30)),
        ];
        let buckets = by_time_period(&logs, &periods);
        assert_eq!(buckets[0].len(), 1);
        assert!(buckets[1].is_empty());
    }

    #[test]
    fn dedupe_keeps_first_of_each_run() {
        let repeated = vec![
            log(0, 33.0),
            log(1, 33.0),
            log(2, 33.0),
            log(3, 33.1),
            log(4, 33.1),
        ];
        let deduped = dedupe(vec![repeated]);
        assert_eq!(deduped[0], vec![log(0, 33.0), log(3, 33.1)]);
    }

    #[test]
    fn dedupe_keeps_revisited_positions() {
        // Out and back: the return to 33.0 is a real report, not a repeat.
        let out_and_back = vec![log(0, 33.0), log(1, 33.1), log(2, 33.0)];
        let deduped = dedupe(vec![out_and_back.clone()]);
        assert_eq!(deduped[0], out_and_back);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let buckets = vec![vec![log(0, 33.0), log(1, 33.0), log(2, 33.1)]];
        let once = dedupe(buckets);
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
    }
}
