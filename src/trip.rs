//! Concrete trip item record.

use serde::{Deserialize, Serialize};

use crate::traits::{StopKind, TravelMode, TripStop};

/// A stop as stored by the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripItem {
    pub id: String,
    pub day_index: u32,
    pub sort_order: u32,
    pub spot_name: String,
    pub lat: f64,
    pub lng: f64,
    pub stay_minutes: u32,
    #[serde(default)]
    pub travel_mode: TravelMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: StopKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
}

impl TripItem {
    /// A spot reached by car, placed at the start of day 0.
    pub fn new(id: impl Into<String>, spot_name: impl Into<String>, lat: f64, lng: f64, stay_minutes: u32) -> Self {
        Self {
            id: id.into(),
            day_index: 0,
            sort_order: 0,
            spot_name: spot_name.into(),
            lat,
            lng,
            stay_minutes,
            travel_mode: TravelMode::Car,
            place_id: None,
            kind: StopKind::Spot,
            budget: None,
        }
    }

    pub fn on_day(mut self, day_index: u32) -> Self {
        self.day_index = day_index;
        self
    }

    pub fn with_mode(mut self, travel_mode: TravelMode) -> Self {
        self.travel_mode = travel_mode;
        self
    }

    pub fn with_kind(mut self, kind: StopKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_place_id(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = Some(place_id.into());
        self
    }
}

impl TripStop for TripItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn day_index(&self) -> u32 {
        self.day_index
    }

    fn sort_order(&self) -> u32 {
        self.sort_order
    }

    fn location(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    fn stay_minutes(&self) -> u32 {
        self.stay_minutes
    }

    fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }
}
