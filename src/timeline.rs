//! Day timelines: grouping, validation and user-driven reordering.
//!
//! A day's list owns the ordering of its stops. Every mutation rewrites
//! `sort_order` for the whole day so it stays a dense 0-based sequence.

use std::collections::BTreeMap;

use crate::error::{check_coordinate, ItineraryError, Result};
use crate::traits::TripStop;
use crate::trip::TripItem;

/// Split a trip into days, each sorted by `sort_order`.
pub fn group_by_day(items: Vec<TripItem>) -> BTreeMap<u32, Vec<TripItem>> {
    let mut days: BTreeMap<u32, Vec<TripItem>> = BTreeMap::new();
    for item in items {
        days.entry(item.day_index).or_default().push(item);
    }
    for stops in days.values_mut() {
        stops.sort_by_key(|stop| stop.sort_order);
    }
    days
}

/// Check day membership, coordinates and the dense `sort_order` invariant.
pub fn validate_day<S: TripStop>(day_index: u32, stops: &[S]) -> Result<()> {
    for (position, stop) in stops.iter().enumerate() {
        if stop.day_index() != day_index {
            return Err(ItineraryError::MixedDays {
                expected: day_index,
                found: stop.day_index(),
                item_id: stop.id().to_string(),
            });
        }

        check_coordinate(stop.id(), stop.location())?;

        let expected = position as u32;
        if stop.sort_order() != expected {
            return Err(ItineraryError::SortOrderGap {
                day_index,
                expected,
                found: stop.sort_order(),
            });
        }
    }
    Ok(())
}

/// Rewrite `sort_order` from array position.
pub fn reindex(stops: &mut [TripItem]) {
    for (position, stop) in stops.iter_mut().enumerate() {
        stop.sort_order = position as u32;
    }
}

/// Move `active_id` to the position currently held by `over_id`.
///
/// Returns `Ok(false)` when both ids are the same (nothing to do).
pub fn move_stop(stops: &mut Vec<TripItem>, active_id: &str, over_id: &str) -> Result<bool> {
    if active_id == over_id {
        return Ok(false);
    }

    let old_index = position_of(stops, active_id)?;
    let new_index = position_of(stops, over_id)?;

    let item = stops.remove(old_index);
    stops.insert(new_index, item);
    reindex(stops);

    tracing::debug!(active_id, old_index, new_index, "moved stop");
    Ok(true)
}

/// Insert `item` at `index` (clamped to the end of the day).
pub fn insert_stop(stops: &mut Vec<TripItem>, index: usize, mut item: TripItem) {
    if let Some(first) = stops.first() {
        item.day_index = first.day_index;
    }
    let index = index.min(stops.len());
    stops.insert(index, item);
    reindex(stops);
}

pub fn remove_stop(stops: &mut Vec<TripItem>, id: &str) -> Result<TripItem> {
    let index = position_of(stops, id)?;
    let removed = stops.remove(index);
    reindex(stops);
    Ok(removed)
}

fn position_of(stops: &[TripItem], id: &str) -> Result<usize> {
    stops
        .iter()
        .position(|stop| stop.id == id)
        .ok_or_else(|| ItineraryError::UnknownStop { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(ids: &[&str]) -> Vec<TripItem> {
        let mut stops: Vec<TripItem> = ids
            .iter()
            .map(|id| TripItem::new(*id, format!("Spot {}", id), 31.59, 130.55, 60))
            .collect();
        reindex(&mut stops);
        stops
    }

    fn ids(stops: &[TripItem]) -> Vec<&str> {
        stops.iter().map(|stop| stop.id.as_str()).collect()
    }

    fn assert_dense(stops: &[TripItem]) {
        for (position, stop) in stops.iter().enumerate() {
            assert_eq!(stop.sort_order as usize, position);
        }
    }

    #[test]
    fn test_move_forward() {
        let mut stops = day(&["a", "b", "c", "d"]);
        assert!(move_stop(&mut stops, "a", "c").unwrap());
        assert_eq!(ids(&stops), vec!["b", "c", "a", "d"]);
        assert_dense(&stops);
    }

    #[test]
    fn test_move_backward() {
        let mut stops = day(&["a", "b", "c", "d"]);
        assert!(move_stop(&mut stops, "d", "b").unwrap());
        assert_eq!(ids(&stops), vec!["a", "d", "b", "c"]);
        assert_dense(&stops);
    }

    #[test]
    fn test_move_onto_itself_is_noop() {
        let mut stops = day(&["a", "b"]);
        assert!(!move_stop(&mut stops, "b", "b").unwrap());
        assert_eq!(ids(&stops), vec!["a", "b"]);
    }

    #[test]
    fn test_move_unknown_stop() {
        let mut stops = day(&["a", "b"]);
        let err = move_stop(&mut stops, "a", "z").unwrap_err();
        assert!(matches!(err, ItineraryError::UnknownStop { ref id } if id == "z"));
        assert_eq!(ids(&stops), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_and_remove_keep_order_dense() {
        let mut stops = day(&["a", "b", "c"]);
        insert_stop(&mut stops, 1, TripItem::new("x", "Lunch", 31.58, 130.55, 60).on_day(7));
        assert_eq!(ids(&stops), vec!["a", "x", "b", "c"]);
        assert_eq!(stops[1].day_index, 0);
        assert_dense(&stops);

        insert_stop(&mut stops, 99, TripItem::new("y", "Onsen", 31.58, 130.55, 60));
        assert_eq!(ids(&stops), vec!["a", "x", "b", "c", "y"]);

        let removed = remove_stop(&mut stops, "b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(ids(&stops), vec!["a", "x", "c", "y"]);
        assert_dense(&stops);
    }

    #[test]
    fn test_group_by_day_sorts_each_day() {
        let mut items = vec![
            TripItem::new("d1-b", "B", 31.6, 130.5, 60).on_day(1),
            TripItem::new("d0-a", "A", 31.6, 130.5, 0),
            TripItem::new("d1-a", "A", 31.6, 130.5, 0).on_day(1),
        ];
        items[0].sort_order = 1;
        let days = group_by_day(items);
        assert_eq!(days.keys().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(ids(&days[&1]), vec!["d1-a", "d1-b"]);
    }

    #[test]
    fn test_validate_day() {
        let stops = day(&["a", "b", "c"]);
        assert!(validate_day(0, &stops).is_ok());

        let mut gapped = stops.clone();
        gapped[2].sort_order = 3;
        assert!(matches!(
            validate_day(0, &gapped),
            Err(ItineraryError::SortOrderGap { expected: 2, found: 3, .. })
        ));

        let mut mixed = stops.clone();
        mixed[1].day_index = 2;
        assert!(matches!(validate_day(0, &mixed), Err(ItineraryError::MixedDays { found: 2, .. })));

        let mut broken = stops;
        broken[0].lat = f64::NAN;
        assert!(matches!(validate_day(0, &broken), Err(ItineraryError::InvalidCoordinate { .. })));
    }
}
