//! Haversine segment estimator (instant feedback without a routing service).
//!
//! Uses great-circle distance inflated by a road-curvature factor, then an
//! assumed average speed to estimate travel time.

use serde::{Deserialize, Serialize};

use crate::traits::{RouteEstimator, TravelMode};

/// Average travel speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Straight-line to road distance inflation.
const DEFAULT_ROAD_FACTOR: f64 = 1.4;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance/time estimate for one leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentEstimate {
    /// Road-adjusted distance in kilometers.
    pub distance_km: f64,
    pub duration_seconds: u32,
}

impl SegmentEstimate {
    /// Estimate with whole-minute precision, as produced by the haversine path.
    pub fn from_minutes(distance_km: f64, minutes: u32) -> Self {
        Self {
            distance_km,
            duration_seconds: minutes.saturating_mul(60),
        }
    }

    pub fn distance_meters(&self) -> u32 {
        (self.distance_km * 1000.0).round() as u32
    }

    /// Travel time rounded to the nearest minute.
    pub fn time_minutes(&self) -> u32 {
        self.duration_seconds / 60 + u32::from(self.duration_seconds % 60 >= 30)
    }
}

/// Haversine-based segment estimator.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    /// Assumed average speed in km/h.
    pub speed_kmh: f64,
    /// Multiplier applied to the great-circle distance.
    pub road_factor: f64,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
            road_factor: DEFAULT_ROAD_FACTOR,
        }
    }
}

impl HaversineEstimator {
    pub fn new(speed_kmh: f64, road_factor: f64) -> Self {
        Self {
            speed_kmh,
            road_factor,
        }
    }

    /// Derive the road distance and travel time between two points.
    ///
    /// Coordinates must be finite; callers validate before invoking.
    pub fn derive(&self, from: (f64, f64), to: (f64, f64)) -> SegmentEstimate {
        let distance_km = haversine_km(from, to) * self.road_factor;
        SegmentEstimate::from_minutes(distance_km, self.km_to_minutes(distance_km))
    }

    /// Convert distance in km to travel time in whole minutes.
    ///
    /// A non-positive speed saturates to `u32::MAX` minutes.
    fn km_to_minutes(&self, km: f64) -> u32 {
        let hours = km / self.speed_kmh;
        (hours * 60.0).round() as u32
    }
}

impl RouteEstimator for HaversineEstimator {
    fn estimate(&self, from: (f64, f64), to: (f64, f64), _mode: TravelMode) -> SegmentEstimate {
        self.derive(from, to)
    }
}

/// Great-circle distance between two (lat, lng) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}
