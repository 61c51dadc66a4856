//! Interoperability gap statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{seconds_between, AccessEvent, TimePeriod};

/// Largest and mean gap between consecutive events, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimesBetween {
    pub max_secs: f64,
    pub avg_secs: f64,
}

/// Gap statistics over pre-partitioned event timestamps, one bucket per
/// flight period.
///
/// Gaps are measured between consecutive events within a bucket and never
/// across buckets, so the quiet stretch between two flights is not held
/// against a team. Returns None when no bucket holds at least two events:
/// the statistics are undefined, which is not the same as a gap of zero.
pub fn times_between(period_events: &[Vec<DateTime<Utc>>]) -> Option<TimesBetween> {
    let mut gap_count = 0usize;
    let mut gap_sum = 0.0;
    let mut gap_max = f64::NEG_INFINITY;

    for events in period_events {
        for pair in events.windows(2) {
            let gap = seconds_between(pair[0], pair[1]);
            gap_count += 1;
            gap_sum += gap;
            gap_max = gap_max.max(gap);
        }
    }

    if gap_count == 0 {
        return None;
    }
    Some(TimesBetween {
        max_secs: gap_max,
        avg_secs: gap_sum / gap_count as f64,
    })
}

/// Gap statistics for an interface access log, restricted to the given
/// flight periods (inclusive at both period ends).
pub fn access_rates(events: &[AccessEvent], periods: &[TimePeriod]) -> Option<TimesBetween> {
    let buckets: Vec<Vec<DateTime<Utc>>> = periods
        .iter()
        .map(|period| {
            events
                .iter()
                .map(|event| event.timestamp)
                .filter(|t| period.contains(*t))
                .collect()
        })
        .collect();
    times_between(&buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::seconds(secs.into())
    }

    fn event(secs: u32) -> AccessEvent {
        AccessEvent {
            timestamp: at(secs),
        }
    }

    #[test]
    fn gaps_within_one_period() {
        let events = [event(0), event(5), event(15)];
        let periods = [TimePeriod::new(at(0), at(60))];
        let times = access_rates(&events, &periods).unwrap();
        assert!((times.max_secs - 10.0).abs() < 1e-9);
        assert!((times.avg_secs - 7.5).abs() < 1e-9);
    }

    #[test]
    fn single_event_has_undefined_rates() {
        let events = [event(5)];
        let periods = [TimePeriod::new(at(0), at(60))];
        assert_eq!(access_rates(&events, &periods), None);
    }

    #[test]
    fn gaps_never_span_period_boundaries() {
        // One event per flight: no period holds a consecutive pair.
        let events = [event(5), event(45)];
        let periods = [
            TimePeriod::new(at(0), at(10)),
            TimePeriod::new(at(40), at(60)),
        ];
        assert_eq!(access_rates(&events, &periods), None);
    }

    #[test]
    fn gaps_merge_across_periods() {
        let events = [event(0), event(2), event(40), event(48)];
        let periods = [
            TimePeriod::new(at(0), at(10)),
            TimePeriod::new(at(40), at(60)),
        ];
        let times = access_rates(&events, &periods).unwrap();
        assert!((times.max_secs - 8.0).abs() < 1e-9);
        assert!((times.avg_secs - 5.0).abs() < 1e-9);
    }

    #[test]
    fn events_outside_every_period_are_ignored() {
        let events = [event(20), event(25)];
        let periods = [TimePeriod::new(at(0), at(10))];
        assert_eq!(access_rates(&events, &periods), None);
    }

    #[test]
    fn times_between_over_raw_buckets() {
        let buckets = vec![vec![at(0), at(1), at(2)], Vec::new()];
        let times = times_between(&buckets).unwrap();
        assert!((times.max_secs - 1.0).abs() < 1e-9);
        assert!((times.avg_secs - 1.0).abs() < 1e-9);
    }
}
