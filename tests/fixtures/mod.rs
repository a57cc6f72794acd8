// Shared test data and an in-memory booking service.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;
use room_booking::models::booking::Booking;
use room_booking::services::booking_api::{BookingApi, BookingError};

pub mod dates {
    use super::*;

    /// Monday, 3 March 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    /// Wednesday of the same week
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    /// Sunday closing the same week
    pub fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }
}

/// Booking service kept in memory. Slots listed in `refuse` are rejected
/// with a 409 and a detail message.
#[derive(Default)]
pub struct FakeBookingService {
    bookings: Mutex<Vec<Booking>>,
    refuse: Mutex<HashSet<(String, String)>>,
    create_calls: AtomicUsize,
    offline: bool,
}

impl FakeBookingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        let service = Self::default();
        *service.bookings.lock().unwrap() = bookings;
        service
    }

    pub fn refuse(&self, date: NaiveDate, time_slot: &str) {
        self.refuse
            .lock()
            .unwrap()
            .insert((date.format("%Y-%m-%d").to_string(), time_slot.to_string()));
    }

    pub fn stored(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

impl BookingApi for FakeBookingService {
    fn fetch_bookings(&self) -> Result<Vec<Booking>, BookingError> {
        if self.offline {
            return Err(BookingError::Connection("connection refused".to_string()));
        }
        Ok(self.stored())
    }

    fn create_booking(&self, booking: &Booking) -> Result<(), BookingError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(BookingError::Connection("connection refused".to_string()));
        }
        let key = (booking.date.clone(), booking.time_slot.clone());
        if self.refuse.lock().unwrap().contains(&key) {
            return Err(BookingError::Rejected {
                status: 409,
                detail: Some("Slot already taken".to_string()),
            });
        }
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(())
    }
}
