//! Real Kagoshima-area locations for realistic test fixtures.

use itinerary_planner::timeline::reindex;
use itinerary_planner::trip::TripItem;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn stop(&self, id: &str, stay_minutes: u32) -> TripItem {
        TripItem::new(id, self.name, self.lat, self.lng, stay_minutes)
    }
}

// ============================================================================
// Kagoshima city (all within a short drive of each other)
// ============================================================================

pub const KAGOSHIMA_CHUO: Location = Location::new("Kagoshima-Chuo Station", 31.5833, 130.5417);
pub const SENGAN_EN: Location = Location::new("Sengan-en", 31.6178, 130.5828);
pub const SAKURAJIMA_VISITOR_CENTER: Location = Location::new("Sakurajima Visitor Center", 31.5878, 130.5985);
pub const AJIMORI: Location = Location::new("Ajimori (lunch)", 31.5865, 130.5516);
pub const SHIROYAMA: Location = Location::new("Shiroyama Observatory", 31.5972, 130.5533);
pub const TENMONKAN: Location = Location::new("Tenmonkan", 31.5888, 130.5556);

// ============================================================================
// Farther afield (several hours by road from the city)
// ============================================================================

pub const KUMAMOTO_CASTLE: Location = Location::new("Kumamoto Castle", 32.8063, 130.7058);
pub const KIRISHIMA_JINGU: Location = Location::new("Kirishima Jingu", 31.8588, 130.8717);

/// Build a single day from (location, stay) pairs with dense sort order.
pub fn day(stops: &[(&Location, u32)]) -> Vec<TripItem> {
    let mut items: Vec<TripItem> = stops
        .iter()
        .enumerate()
        .map(|(i, (location, stay))| location.stop(&(i + 1).to_string(), *stay))
        .collect();
    reindex(&mut items);
    items
}
