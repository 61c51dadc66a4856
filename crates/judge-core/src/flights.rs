//! Flight period resolution from takeoff and landing events.

use chrono::{DateTime, Utc};

use crate::error::EvalError;
use crate::models::{FlightEvent, FlightEventKind, TimePeriod};

/// Pair time-ordered takeoff/landing events into closed flight periods.
///
/// Events must strictly alternate takeoff then landing. Anything else is a
/// judging data error: the engine reports it rather than guessing where a
/// flight began or ended.
pub fn flight_periods(events: &[FlightEvent]) -> Result<Vec<TimePeriod>, EvalError> {
    let mut periods = Vec::new();
    let mut open_takeoff: Option<DateTime<Utc>> = None;

    for event in events {
        match (event.kind, open_takeoff) {
            (FlightEventKind::Takeoff, None) => {
                open_takeoff = Some(event.timestamp);
            }
            (FlightEventKind::Takeoff, Some(_)) => {
                return Err(EvalError::TakeoffWhileAirborne(event.timestamp));
            }
            (FlightEventKind::Landing, Some(start)) => {
                periods.push(TimePeriod::new(start, event.timestamp));
                open_takeoff = None;
            }
            (FlightEventKind::Landing, None) => {
                return Err(EvalError::LandingWithoutTakeoff(event.timestamp));
            }
        }
    }

    if let Some(start) = open_takeoff {
        return Err(EvalError::UnmatchedTakeoff(start));
    }
    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, secs).unwrap()
    }

    fn takeoff(secs: u32) -> FlightEvent {
        FlightEvent::new(at(secs), FlightEventKind::Takeoff)
    }

    fn landing(secs: u32) -> FlightEvent {
        FlightEvent::new(at(secs), FlightEventKind::Landing)
    }

    #[test]
    fn no_events_yield_no_periods() {
        assert_eq!(flight_periods(&[]), Ok(Vec::new()));
    }

    #[test]
    fn pairs_alternating_events_into_periods() {
        let events = [takeoff(0), landing(10), takeoff(20), landing(35)];
        let periods = flight_periods(&events).unwrap();
        assert_eq!(
            periods,
            vec![
                TimePeriod::new(at(0), at(10)),
                TimePeriod::new(at(20), at(35)),
            ]
        );
    }

    #[test]
    fn rejects_landing_without_takeoff() {
        let events = [landing(5), takeoff(10), landing(20)];
        assert_eq!(
            flight_periods(&events),
            Err(EvalError::LandingWithoutTakeoff(at(5)))
        );
    }

    #[test]
    fn rejects_double_takeoff() {
        let events = [takeoff(0), takeoff(5), landing(10)];
        assert_eq!(
            flight_periods(&events),
            Err(EvalError::TakeoffWhileAirborne(at(5)))
        );
    }

    #[test]
    fn rejects_trailing_open_takeoff() {
        let events = [takeoff(0), landing(10), takeoff(20)];
        assert_eq!(
            flight_periods(&events),
            Err(EvalError::UnmatchedTakeoff(at(20)))
        );
    }
}
