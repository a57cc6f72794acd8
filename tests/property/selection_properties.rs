// Drag selection properties

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use room_booking::models::booking::Booking;
use room_booking::models::room::ROOMS;
use room_booking::models::settings::SelectionMode;
use room_booking::models::time_slot::{slot_index, TIME_SLOTS};
use room_booking::services::availability::AvailabilityCache;
use room_booking::services::selection::SelectionEngine;

use crate::{any_date, any_slot};

fn drag(cache: &AvailabilityCache, date: NaiveDate, from: usize, to: usize) -> Vec<&'static str> {
    let mut selection = SelectionEngine::new(SelectionMode::Drag);
    selection.pointer_down(cache, &ROOMS[1], date, TIME_SLOTS[from]);
    selection.pointer_enter(cache, &ROOMS[1], date, TIME_SLOTS[to]);
    selection.pointer_up();
    selection.slots().iter().map(|slot| slot.time).collect()
}

proptest! {
    /// Dragging up or down over the same cells selects the same run.
    #[test]
    fn prop_drag_direction_does_not_matter(date in any_date(), a in any_slot(), b in any_slot()) {
        let cache = AvailabilityCache::new();
        let mut down = drag(&cache, date, a, b);
        let mut up = drag(&cache, date, b, a);
        down.sort_by_key(|time| slot_index(time));
        up.sort_by_key(|time| slot_index(time));

        prop_assert_eq!(down.len(), a.abs_diff(b) + 1);
        prop_assert_eq!(down, up);
    }

    /// Booked cells never end up in a drag selection unless they are the
    /// anchor, which cannot be pressed while booked.
    #[test]
    fn prop_drag_skips_booked(date in any_date(), a in any_slot(), b in any_slot(), booked in prop::collection::vec(any_slot(), 0..10)) {
        let cache = AvailabilityCache::from_bookings(
            booked.iter().map(|&i| Booking::new(ROOMS[1].name, date, TIME_SLOTS[i])).collect(),
        );
        let selected = drag(&cache, date, a, b);

        for time in &selected {
            prop_assert!(!cache.is_booked(ROOMS[1].name, date, time));
        }
        if booked.contains(&a) {
            prop_assert!(selected.is_empty());
        }
    }

    /// Moving into another date column leaves the selection untouched.
    #[test]
    fn prop_drag_stays_in_its_column(date in any_date(), a in any_slot(), b in any_slot(), shift in 1i64..7) {
        let cache = AvailabilityCache::new();
        let mut selection = SelectionEngine::new(SelectionMode::Drag);
        selection.pointer_down(&cache, &ROOMS[0], date, TIME_SLOTS[a]);
        let changed = selection.pointer_enter(&cache, &ROOMS[0], date + Duration::days(shift), TIME_SLOTS[b]);

        prop_assert!(!changed);
        prop_assert_eq!(selection.slots().len(), 1);
        prop_assert_eq!(selection.slots()[0].time, TIME_SLOTS[a]);
    }
}
