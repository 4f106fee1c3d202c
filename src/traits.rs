//! Core domain traits for the itinerary planner.
//!
//! Applications keep their own stop and segment records; the deriver and the
//! scorer only see them through these traits.

use serde::{Deserialize, Serialize};

use crate::haversine::SegmentEstimate;

/// A single point-of-interest or waypoint in a day's itinerary.
pub trait TripStop {
    fn id(&self) -> &str;

    /// Which day of a multi-day trip this stop belongs to.
    fn day_index(&self) -> u32;

    /// Position within its day (dense, 0-based).
    fn sort_order(&self) -> u32;

    /// Location coordinates (lat, lng).
    fn location(&self) -> (f64, f64);

    /// Planned stay in minutes. Zero marks a waypoint such as a departure point.
    fn stay_minutes(&self) -> u32;

    /// Mode used to reach this stop from the previous one.
    fn travel_mode(&self) -> TravelMode;

    fn is_visited(&self) -> bool {
        self.stay_minutes() > 0
    }
}

/// Travel metrics of one leg, as consumed by the scorer.
pub trait SegmentMetrics {
    fn duration_seconds(&self) -> u32;
    fn distance_meters(&self) -> u32;
}

/// Estimates a travel leg between two locations.
///
/// Implemented by the offline haversine estimator and by routing backends.
pub trait RouteEstimator {
    fn estimate(&self, from: (f64, f64), to: (f64, f64), mode: TravelMode) -> SegmentEstimate;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Car,
    Transit,
    Walk,
}

/// Distinguishes a real stop from an unresolved meal placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    #[default]
    Spot,
    LunchPlaceholder,
    DinnerPlaceholder,
}

impl StopKind {
    pub fn is_placeholder(self) -> bool {
        !matches!(self, StopKind::Spot)
    }
}
