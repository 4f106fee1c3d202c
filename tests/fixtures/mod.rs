//! Test fixtures for itinerary-planner.
//!
//! Provides real Kagoshima-area locations and a small day builder.

#![allow(dead_code)]

pub mod kagoshima_locations;

pub use kagoshima_locations::*;
