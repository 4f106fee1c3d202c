//! itinerary-planner core
//!
//! Segment estimates and quality scoring for day-by-day trip plans.

pub mod traits;
pub mod error;
pub mod trip;
pub mod haversine;
pub mod segment;
pub mod scoring;
pub mod timeline;
pub mod planner;
pub mod osrm;
