// Availability lookup properties

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use room_booking::models::booking::Booking;
use room_booking::models::room::ROOMS;
use room_booking::models::time_slot::TIME_SLOTS;
use room_booking::services::availability::AvailabilityCache;

use crate::{any_date, any_slot};

fn bookings_around(date: NaiveDate, entries: &[(usize, i64, usize)]) -> Vec<Booking> {
    entries
        .iter()
        .map(|&(r, d, s)| Booking::new(ROOMS[r].name, date + Duration::days(d), TIME_SLOTS[s]))
        .collect()
}

proptest! {
    /// A cell is booked exactly when some booking matches room, date and slot.
    #[test]
    fn prop_is_booked_matches_list(
        date in any_date(),
        entries in prop::collection::vec((0usize..3, 0i64..7, any_slot()), 0..20),
        room in 0usize..3,
        day in 0i64..7,
        slot in any_slot(),
    ) {
        let expected = entries.iter().any(|&(r, d, s)| r == room && d == day && s == slot);
        let cache = AvailabilityCache::from_bookings(bookings_around(date, &entries));

        prop_assert_eq!(cache.is_booked(ROOMS[room].name, date + Duration::days(day), TIME_SLOTS[slot]), expected);
    }

    /// The per-column set the grid paints from agrees with `is_booked` for
    /// every slot of the day.
    #[test]
    fn prop_column_set_matches_is_booked(
        date in any_date(),
        entries in prop::collection::vec((0usize..3, 0i64..7, any_slot()), 0..40),
        room in 0usize..3,
        day in 0i64..7,
    ) {
        let cache = AvailabilityCache::from_bookings(bookings_around(date, &entries));
        let column = date + Duration::days(day);
        let booked = cache.booked_slots(ROOMS[room].name, column);

        for slot in TIME_SLOTS {
            prop_assert_eq!(booked.contains(slot), cache.is_booked(ROOMS[room].name, column, slot));
        }
    }
}
