//! Locally cached booking list and its periodic refresh.

mod refresher;
mod scheduler;

pub use refresher::{AvailabilityRefresher, RefreshPoll};
pub use scheduler::RefreshScheduler;

use std::collections::HashSet;
use std::time::Instant;

use chrono::NaiveDate;

use crate::models::booking::Booking;
use crate::utils::date::iso_date;

/// The most recently fetched booking list.
///
/// Replaced wholesale on every successful refresh, never merged.
#[derive(Debug, Default, Clone)]
pub struct AvailabilityCache {
    bookings: Vec<Booking>,
    refreshed_at: Option<Instant>,
}

impl AvailabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings,
            refreshed_at: Some(Instant::now()),
        }
    }

    pub fn replace(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
        self.refreshed_at = Some(Instant::now());
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// When the list was last replaced; `None` until the first fetch lands.
    pub fn refreshed_at(&self) -> Option<Instant> {
        self.refreshed_at
    }

    pub fn is_booked(&self, room_name: &str, date: NaiveDate, time_slot: &str) -> bool {
        self.is_booked_iso(room_name, &iso_date(date), time_slot)
    }

    pub fn is_booked_iso(&self, room_name: &str, iso_date: &str, time_slot: &str) -> bool {
        self.bookings
            .iter()
            .any(|booking| booking.matches(room_name, iso_date, time_slot))
    }

    /// Booked slot labels for one room and day, for rendering a column.
    pub fn booked_slots(&self, room_name: &str, date: NaiveDate) -> HashSet<&str> {
        let date = iso_date(date);
        self.bookings
            .iter()
            .filter(|booking| booking.room_name == room_name && booking.date == date)
            .map(|booking| booking.time_slot.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> AvailabilityCache {
        AvailabilityCache::from_bookings(vec![
            Booking::new("Salsa", ymd(2025, 3, 3), "10:00"),
            Booking::new("Salsa", ymd(2025, 3, 3), "10:30"),
            Booking::new("Air&Light", ymd(2025, 3, 4), "18:00"),
        ])
    }

    #[test]
    fn test_empty_cache_has_nothing_booked() {
        let cache = AvailabilityCache::new();
        assert!(cache.is_empty());
        assert!(cache.refreshed_at().is_none());
        assert!(!cache.is_booked("Salsa", ymd(2025, 3, 3), "10:00"));
    }

    #[test]
    fn test_is_booked_requires_all_three_fields() {
        let cache = sample();
        assert!(cache.is_booked("Salsa", ymd(2025, 3, 3), "10:00"));
        assert!(!cache.is_booked("Air&Light", ymd(2025, 3, 3), "10:00"));
        assert!(!cache.is_booked("Salsa", ymd(2025, 3, 4), "10:00"));
        assert!(!cache.is_booked("Salsa", ymd(2025, 3, 3), "11:00"));
    }

    #[test]
    fn test_replace_discards_previous_contents() {
        let mut cache = sample();
        cache.replace(vec![Booking::new("Salsa", ymd(2025, 3, 5), "06:00")]);
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_booked("Salsa", ymd(2025, 3, 3), "10:00"));
        assert!(cache.is_booked("Salsa", ymd(2025, 3, 5), "06:00"));
    }

    #[test]
    fn test_booked_slots_for_column() {
        let cache = sample();
        let slots = cache.booked_slots("Salsa", ymd(2025, 3, 3));
        assert_eq!(slots.len(), 2);
        assert!(slots.contains("10:00") && slots.contains("10:30"));
        assert!(cache.booked_slots("Salsa", ymd(2025, 3, 4)).is_empty());
    }
}
