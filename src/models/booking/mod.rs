//! Booking records exchanged with the booking service, and the slots a user
//! is in the middle of choosing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date::iso_date;

/// A reservation accepted by the booking service.
///
/// Also used as the request body when creating one: the service takes the
/// same three fields it returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Booking {
    pub room_name: String,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    /// Slot label, `HH:MM`
    pub time_slot: String,
}

impl Booking {
    pub fn new(room_name: impl Into<String>, date: NaiveDate, time_slot: impl Into<String>) -> Self {
        Self {
            room_name: room_name.into(),
            date: iso_date(date),
            time_slot: time_slot.into(),
        }
    }

    /// Exact string match on all three fields; no normalization.
    pub fn matches(&self, room_name: &str, iso_date: &str, time_slot: &str) -> bool {
        self.room_name == room_name && self.date == iso_date && self.time_slot == time_slot
    }

    /// Name of the first empty field, if any. The service rejects such bodies.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.room_name.trim().is_empty() {
            Some("room_name")
        } else if self.date.trim().is_empty() {
            Some("date")
        } else if self.time_slot.trim().is_empty() {
            Some("time_slot")
        } else {
            None
        }
    }
}

/// A slot the user is currently choosing to book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionSlot {
    pub date: NaiveDate,
    pub time: &'static str,
}

impl SelectionSlot {
    pub fn new(date: NaiveDate, time: &'static str) -> Self {
        Self { date, time }
    }

    /// Request body for reserving this slot in `room_name`.
    pub fn to_booking(&self, room_name: &str) -> Booking {
        Booking::new(room_name, self.date, self.time)
    }
}
