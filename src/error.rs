//! Input validation errors for the planning boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("stop {item_id} has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinate { item_id: String, lat: f64, lng: f64 },
    #[error("stop {item_id} belongs to day {found}, expected day {expected}")]
    MixedDays {
        expected: u32,
        found: u32,
        item_id: String,
    },
    #[error("day {day_index} has sort_order {found} where {expected} was expected")]
    SortOrderGap {
        day_index: u32,
        expected: u32,
        found: u32,
    },
    #[error("no stop with id {id} in this day")]
    UnknownStop { id: String },
    #[error("routing client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ItineraryError>;

/// Reject coordinates that are non-finite or outside WGS84 bounds.
pub fn check_coordinate(item_id: &str, (lat, lng): (f64, f64)) -> Result<()> {
    let valid = lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng);

    if valid {
        Ok(())
    } else {
        Err(ItineraryError::InvalidCoordinate {
            item_id: item_id.to_string(),
            lat,
            lng,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_coordinate() {
        assert!(check_coordinate("a", (31.5833, 130.5417)).is_ok());
        assert!(check_coordinate("edge", (-90.0, 180.0)).is_ok());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(check_coordinate("nan", (f64::NAN, 130.0)).is_err());
        assert!(check_coordinate("inf", (31.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = check_coordinate("far", (91.0, 0.0)).unwrap_err();
        assert!(matches!(err, ItineraryError::InvalidCoordinate { ref item_id, .. } if item_id == "far"));
        assert!(check_coordinate("wrap", (0.0, -180.5)).is_err());
    }
}
