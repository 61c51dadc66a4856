//! Obstacle collision checks against flight telemetry.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{AerialPosition, MovingObstacle, StationaryObstacle, TelemetryLog};

/// A borrowed view over either obstacle kind, giving both the same
/// containment capability.
#[derive(Debug, Clone, Copy)]
pub enum Obstacle<'a> {
    Stationary(&'a StationaryObstacle),
    Moving(&'a MovingObstacle),
}

impl Obstacle<'_> {
    /// Identifier used to key collision maps.
    pub fn id(&self) -> u32 {
        match self {
            Obstacle::Stationary(obstacle) => obstacle.id,
            Obstacle::Moving(obstacle) => obstacle.id,
        }
    }

    /// Whether the obstacle's volume contains `pos` at time `t`. A
    /// stationary obstacle ignores `t`.
    pub fn contains_at(&self, pos: &AerialPosition, t: DateTime<Utc>) -> bool {
        match self {
            Obstacle::Stationary(obstacle) => obstacle.contains(pos),
            Obstacle::Moving(obstacle) => obstacle.contains_at(pos, t),
        }
    }

    /// Whether any telemetry sample sits inside the obstacle at that
    /// sample's own timestamp.
    pub fn collides_with(&self, logs: &[TelemetryLog]) -> bool {
        logs.iter()
            .any(|log| self.contains_at(&log.position, log.timestamp))
    }
}

/// Check every obstacle independently against the full telemetry history
/// and key the verdicts by obstacle id.
pub fn collisions<'a>(
    obstacles: impl Iterator<Item = Obstacle<'a>>,
    logs: &[TelemetryLog],
) -> BTreeMap<u32, bool> {
    obstacles
        .map(|obstacle| (obstacle.id(), obstacle.collides_with(logs)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GpsPosition, TrajectorySample};
    use chrono::{Duration, TimeZone};

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::seconds(secs.into())
    }

    fn log(secs: u32, latitude: f64, altitude_ft: f64) -> TelemetryLog {
        TelemetryLog {
            timestamp: at(secs),
            position: AerialPosition::new(latitude, -117.0, altitude_ft),
            heading_deg: 0.0,
        }
    }

    fn tower(id: u32, latitude: f64) -> StationaryObstacle {
        StationaryObstacle {
            id,
            position: GpsPosition::new(latitude, -117.0),
            cylinder_radius_ft: 50.0,
            cylinder_height_ft: 300.0,
        }
    }

    #[test]
    fn keys_verdicts_by_obstacle_id() {
        let hit = tower(3, 33.0);
        let missed = tower(9, 34.0);
        let towers = [hit, missed];
        let verdicts = collisions(
            towers.iter().map(Obstacle::Stationary),
            &[log(0, 33.0, 150.0)],
        );
        assert_eq!(verdicts.get(&3), Some(&true));
        assert_eq!(verdicts.get(&9), Some(&false));
    }

    #[test]
    fn moving_obstacle_collision_needs_matching_time() {
        let obstacle = MovingObstacle {
            id: 7,
            trajectory: vec![
                TrajectorySample {
                    timestamp: at(0),
                    position: AerialPosition::new(33.0, -117.0, 200.0),
                    sphere_radius_ft: 50.0,
                },
                TrajectorySample {
                    timestamp: at(60),
                    position: AerialPosition::new(33.006, -117.0, 200.0),
                    sphere_radius_ft: 50.0,
                },
            ],
        };

        // Sitting where the obstacle starts, but only after it has left.
        let late = [log(30, 33.0, 200.0)];
        assert!(!Obstacle::Moving(&obstacle).collides_with(&late));

        let on_time = [log(0, 33.0, 200.0)];
        assert!(Obstacle::Moving(&obstacle).collides_with(&on_time));
    }

    #[test]
    fn no_telemetry_means_no_collision() {
        let towers = [tower(1, 33.0)];
        let verdicts = collisions(towers.iter().map(Obstacle::Stationary), &[]);
        assert_eq!(verdicts.get(&1), Some(&false));
    }

    #[test]
    fn any_single_sample_inside_is_a_collision() {
        let towers = [tower(1, 33.0)];
        let logs = [
            log(0, 34.0, 150.0),
            log(10, 33.0, 150.0),
            log(20, 34.0, 150.0),
        ];
        let verdicts = collisions(towers.iter().map(Obstacle::Stationary), &logs);
        assert_eq!(verdicts.get(&1), Some(&true));
    }
}
