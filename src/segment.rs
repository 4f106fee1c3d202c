//! Derived travel legs between consecutive stops of a day.

use serde::{Deserialize, Serialize};

use crate::haversine::SegmentEstimate;
use crate::traits::{RouteEstimator, SegmentMetrics, TravelMode, TripStop};

/// Rough per-kilometer cost range (yen) for routed legs.
#[derive(Debug, Clone)]
pub struct CostModel {
    pub yen_per_km_min: f64,
    pub yen_per_km_max: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            yen_per_km_min: 20.0,
            yen_per_km_max: 45.0,
        }
    }
}

impl CostModel {
    /// Car and transit legs share one per-km range; walking is free.
    pub fn estimate(&self, mode: TravelMode, distance_km: f64) -> Option<CostRange> {
        match mode {
            TravelMode::Car | TravelMode::Transit => Some(CostRange {
                min: (distance_km * self.yen_per_km_min).round() as u32,
                max: (distance_km * self.yen_per_km_max).round() as u32,
            }),
            TravelMode::Walk => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from_item_id: String,
    pub to_item_id: String,
    pub route_mode: TravelMode,
    pub distance_meters: u32,
    pub duration_seconds: u32,
    pub estimated_cost: Option<CostRange>,
}

impl Segment {
    pub fn from_estimate<S: TripStop>(from: &S, to: &S, estimate: SegmentEstimate, costs: &CostModel) -> Self {
        let route_mode = to.travel_mode();
        Self {
            from_item_id: from.id().to_string(),
            to_item_id: to.id().to_string(),
            route_mode,
            distance_meters: estimate.distance_meters(),
            duration_seconds: estimate.duration_seconds,
            estimated_cost: costs.estimate(route_mode, estimate.distance_km),
        }
    }
}

impl SegmentMetrics for Segment {
    fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    fn distance_meters(&self) -> u32 {
        self.distance_meters
    }
}

/// One segment per adjacent pair of an already ordered day.
pub fn derive_segments<S, E>(stops: &[S], estimator: &E, costs: &CostModel) -> Vec<Segment>
where
    S: TripStop,
    E: RouteEstimator,
{
    stops
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let estimate = estimator.estimate(from.location(), to.location(), to.travel_mode());
            tracing::debug!(
                from = from.id(),
                to = to.id(),
                distance_km = estimate.distance_km,
                seconds = estimate.duration_seconds,
                "derived segment"
            );
            Segment::from_estimate(from, to, estimate, costs)
        })
        .collect()
}
