//! Client side of the remote booking service.
//!
//! The service exposes one endpoint: `GET` returns every booking, `POST`
//! with a `{room_name, date, time_slot}` body creates one.

mod client;

pub use client::HttpBookingClient;

use crate::models::booking::Booking;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// No response at all: DNS, refused connection, timeout, broken body
    #[error("Network error talking to the booking service: {0}")]
    Connection(String),
    /// Booking list request answered with a non-success status
    #[error("Booking service answered with HTTP status {0}")]
    Status(u16),
    /// Booking list body was not the expected JSON array
    #[error("Unexpected booking list format: {0}")]
    Decode(String),
    /// Create request refused by the service
    #[error("Booking rejected (HTTP {status}){}", detail_suffix(.detail))]
    Rejected { status: u16, detail: Option<String> },
    /// Not sent: the service would refuse a body with an empty field
    #[error("Booking is missing field '{0}'")]
    Invalid(&'static str),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {}", d)).unwrap_or_default()
}

impl BookingError {
    /// True when the service never answered.
    pub fn is_connection(&self) -> bool {
        matches!(self, BookingError::Connection(_))
    }

    /// Human-readable reason supplied by the service, if it gave one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            BookingError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Operations the booking grid needs from the remote service.
#[cfg_attr(test, automock)]
pub trait BookingApi: Send + Sync {
    /// Every booking the service knows about, for all rooms.
    fn fetch_bookings(&self) -> Result<Vec<Booking>, BookingError>;

    /// Reserve one slot.
    fn create_booking(&self, booking: &Booking) -> Result<(), BookingError>;
}
