//! Evaluation report records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::rates::TimesBetween;

/// Gap statistics for the three required interop interfaces. A None entry
/// means the statistic was undefined for that interface, not that the gap
/// was zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteropTimes {
    pub server_info: Option<TimesBetween>,
    pub obst_info: Option<TimesBetween>,
    pub uas_telem: Option<TimesBetween>,
}

/// The scored outcome for one competitor.
///
/// Maps are keyed by waypoint order or obstacle id, so two reports built
/// from the same logs compare equal field by field whatever order the
/// inputs arrived in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEvaluation {
    pub waypoints_satisfied: BTreeMap<u32, bool>,
    pub out_of_bounds_time_secs: f64,
    pub interop_times: InteropTimes,
    pub stationary_obst_collision: BTreeMap<u32, bool>,
    pub moving_obst_collision: BTreeMap<u32, bool>,
}

/// The full evaluation outcome, keyed by competitor username.
///
/// A competitor whose logs could not be interpreted keeps an entry holding
/// the error, so one malformed stream never hides the rest of the field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvaluationReport {
    pub teams: BTreeMap<String, Result<TeamEvaluation, EvalError>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_evaluation_serializes_with_stable_field_names() {
        let eval = TeamEvaluation {
            waypoints_satisfied: BTreeMap::from([(1, true), (2, false)]),
            out_of_bounds_time_secs: 10.0,
            interop_times: InteropTimes {
                server_info: Some(TimesBetween {
                    max_secs: 5.0,
                    avg_secs: 5.0,
                }),
                obst_info: None,
                uas_telem: None,
            },
            stationary_obst_collision: BTreeMap::from([(4, true)]),
            moving_obst_collision: BTreeMap::new(),
        };

        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["waypoints_satisfied"]["1"], true);
        assert_eq!(json["waypoints_satisfied"]["2"], false);
        assert_eq!(json["out_of_bounds_time_secs"], 10.0);
        assert_eq!(json["interop_times"]["server_info"]["max_secs"], 5.0);
        assert!(json["interop_times"]["obst_info"].is_null());
        assert_eq!(json["stationary_obst_collision"]["4"], true);
    }
}
