//! Error types for mission evaluation.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Why an evaluation, or one competitor's share of it, could not be scored.
///
/// Mission configuration problems abort the whole evaluation. Flight log
/// problems are scoped to the competitor whose logs are malformed and are
/// recorded in that competitor's report entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The mission defines no waypoints to fly.
    #[error("mission configuration has no waypoints")]
    NoWaypoints,

    /// Two mission waypoints share the same path order.
    #[error("mission configuration repeats waypoint order {0}")]
    DuplicateWaypointOrder(u32),

    /// A landing event arrived with no takeoff in progress.
    #[error("landing at {0} has no preceding takeoff")]
    LandingWithoutTakeoff(DateTime<Utc>),

    /// A takeoff event arrived while an earlier takeoff was still open.
    #[error("takeoff at {0} while already airborne")]
    TakeoffWhileAirborne(DateTime<Utc>),

    /// The event stream ended while a flight was still open.
    #[error("takeoff at {0} has no matching landing")]
    UnmatchedTakeoff(DateTime<Utc>),
}
