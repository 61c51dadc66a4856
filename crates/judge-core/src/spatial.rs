//! Spatial math: great-circle distances, zone containment, and obstacle
//! volume checks.
//!
//! The geometric behavior of the model types lives here so every component
//! measures distance the same way. All distances are in feet.

use chrono::{DateTime, Utc};

use crate::models::{
    seconds_between, AerialPosition, FlyZone, GpsPosition, MovingObstacle, StationaryObstacle,
    TrajectorySample,
};

/// Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6367.0;

/// Feet per kilometer.
pub const FEET_PER_KM: f64 = 3280.84;

impl GpsPosition {
    /// Great-circle surface distance to another position using the
    /// haversine formula.
    ///
    /// # Arguments
    /// * `other` - Position to measure against
    ///
    /// # Returns
    /// Surface distance in feet
    pub fn distance_to(&self, other: &GpsPosition) -> f64 {
        let phi1 = self.latitude.to_radians();
        let phi2 = other.latitude.to_radians();
        let dphi = (other.latitude - self.latitude).to_radians();
        let dlambda = (other.longitude - self.longitude).to_radians();

        let a = (dphi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        let km = 2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt());
        km * FEET_PER_KM
    }
}

impl AerialPosition {
    /// Distance to another aerial position: surface distance and altitude
    /// difference combined, in feet.
    pub fn distance_to(&self, other: &AerialPosition) -> f64 {
        let surface_ft = self.gps.distance_to(&other.gps);
        let altitude_ft = (self.altitude_msl_ft - other.altitude_msl_ft).abs();
        surface_ft.hypot(altitude_ft)
    }
}

impl FlyZone {
    /// Whether the position sits inside this zone's polygon footprint and
    /// altitude band. The band is inclusive at both limits. A boundary with
    /// fewer than 3 vertices encloses no area and contains nothing.
    pub fn contains(&self, pos: &AerialPosition) -> bool {
        if pos.altitude_msl_ft < self.altitude_msl_min_ft
            || pos.altitude_msl_ft > self.altitude_msl_max_ft
        {
            return false;
        }
        polygon_contains(&self.boundary, &pos.gps)
    }
}

/// Ray-casting point-in-polygon test on raw latitude/longitude coordinates.
fn polygon_contains(boundary: &[GpsPosition], point: &GpsPosition) -> bool {
    let n = boundary.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = &boundary[i];
        let vj = &boundary[j];
        if ((vi.latitude > point.latitude) != (vj.latitude > point.latitude))
            && (point.longitude
                < (vj.longitude - vi.longitude) * (point.latitude - vi.latitude)
                    / (vj.latitude - vi.latitude)
                    + vi.longitude)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether the position is inside at least one of the given fly zones.
///
/// With no zones configured there is no approved flight volume anywhere, so
/// every position is out of bounds.
pub fn position_in_zones(pos: &AerialPosition, zones: &[FlyZone]) -> bool {
    zones.iter().any(|zone| zone.contains(pos))
}

impl StationaryObstacle {
    /// Whether the position is inside the obstacle's cylinder. The cylinder
    /// stands on the ground and its boundary counts as inside. A
    /// non-positive radius or height encloses no volume.
    pub fn contains(&self, pos: &AerialPosition) -> bool {
        if self.cylinder_radius_ft <= 0.0 || self.cylinder_height_ft <= 0.0 {
            return false;
        }
        if pos.altitude_msl_ft < 0.0 || pos.altitude_msl_ft > self.cylinder_height_ft {
            return false;
        }
        self.position.distance_to(&pos.gps) <= self.cylinder_radius_ft
    }
}

impl MovingObstacle {
    /// The obstacle's position and radius at time `t`, linearly interpolated
    /// between the bracketing trajectory samples. Times outside the sampled
    /// span clamp to the nearest endpoint. An empty trajectory has no
    /// position at all.
    pub fn sample_at(&self, t: DateTime<Utc>) -> Option<TrajectorySample> {
        let first = self.trajectory.first()?;
        if t <= first.timestamp {
            return Some(first.clone());
        }
        let last = self.trajectory.last()?;
        if t >= last.timestamp {
            return Some(last.clone());
        }

        for pair in self.trajectory.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t < a.timestamp || t > b.timestamp {
                continue;
            }
            let span_secs = seconds_between(a.timestamp, b.timestamp);
            if span_secs <= 0.0 {
                return Some(a.clone());
            }
            let ratio = seconds_between(a.timestamp, t) / span_secs;
            return Some(TrajectorySample {
                timestamp: t,
                position: AerialPosition {
                    gps: GpsPosition::new(
                        lerp(a.position.gps.latitude, b.position.gps.latitude, ratio),
                        lerp(a.position.gps.longitude, b.position.gps.longitude, ratio),
                    ),
                    altitude_msl_ft: lerp(
                        a.position.altitude_msl_ft,
                        b.position.altitude_msl_ft,
                        ratio,
                    ),
                },
                sphere_radius_ft: lerp(a.sphere_radius_ft, b.sphere_radius_ft, ratio),
            });
        }
        None
    }

    /// Whether the position is inside the obstacle's sphere at time `t`.
    /// The sphere boundary counts as inside; a non-positive radius encloses
    /// no volume.
    pub fn contains_at(&self, pos: &AerialPosition, t: DateTime<Utc>) -> bool {
        let Some(sample) = self.sample_at(t) else {
            return false;
        };
        if sample.sphere_radius_ft <= 0.0 {
            return false;
        }
        sample.position.distance_to(pos) <= sample.sphere_radius_ft
    }
}

fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + (b - a) * ratio
}
