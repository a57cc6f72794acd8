//! Sending a finalized selection to the booking service.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use crate::models::booking::{Booking, SelectionSlot};
use crate::models::room::Room;
use crate::services::booking_api::{BookingApi, BookingError};
use crate::services::ResultHook;

/// Severity of the message shown after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Result of submitting one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Empty selection, no request was sent
    Nothing,
    /// Every slot was accepted
    Booked { count: usize },
    /// The single slot was refused by the service
    Rejected { detail: Option<String> },
    /// No request got a response
    ConnectionFailed,
    /// Batch where at least one request failed. Accepted slots stay booked.
    PartiallyFailed { succeeded: usize, failed: usize },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Booked { .. })
    }

    /// Outcome of a lone create request.
    fn from_single(result: Result<(), BookingError>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Booked { count: 1 },
            Err(err) if err.is_connection() => SubmissionOutcome::ConnectionFailed,
            Err(err) => SubmissionOutcome::Rejected {
                detail: err.detail().map(str::to_string),
            },
        }
    }

    /// Level and text for the toast shown to the user.
    pub fn notification(&self) -> Option<(NotificationLevel, String)> {
        let notification = match self {
            SubmissionOutcome::Nothing => return None,
            SubmissionOutcome::Booked { count: 1 } => {
                (NotificationLevel::Success, "Time booked".to_string())
            }
            SubmissionOutcome::Booked { count } => {
                (NotificationLevel::Success, format!("{} slots booked", count))
            }
            SubmissionOutcome::Rejected { detail } => (
                NotificationLevel::Error,
                detail
                    .clone()
                    .unwrap_or_else(|| "Could not complete the booking".to_string()),
            ),
            SubmissionOutcome::ConnectionFailed => (
                NotificationLevel::Error,
                "Connection problem, please try again".to_string(),
            ),
            SubmissionOutcome::PartiallyFailed { .. } => (
                NotificationLevel::Error,
                "Some slots could not be booked".to_string(),
            ),
        };
        Some(notification)
    }
}

/// Issues one create request per selected slot.
#[derive(Clone)]
pub struct ReservationSubmitter {
    api: Arc<dyn BookingApi>,
    on_result: Option<ResultHook>,
}

impl ReservationSubmitter {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self { api, on_result: None }
    }

    /// Run `hook` on the worker thread after a spawned outcome is sent.
    pub fn set_on_result(&mut self, hook: ResultHook) {
        self.on_result = Some(hook);
    }

    /// Blocking submit. One slot is a plain request; several are sent
    /// concurrently and only count as booked if all succeed. Nothing is
    /// rolled back on partial failure.
    pub fn submit(&self, room: &Room, slots: &[SelectionSlot]) -> SubmissionOutcome {
        let bookings: Vec<Booking> = slots.iter().map(|slot| slot.to_booking(room.name)).collect();

        match bookings.as_slice() {
            [] => SubmissionOutcome::Nothing,
            [booking] => {
                log::info!(
                    "Booking {} on {} at {}",
                    booking.room_name,
                    booking.date,
                    booking.time_slot
                );
                let result = self.api.create_booking(booking);
                if let Err(err) = &result {
                    log::warn!("Booking {} {} failed: {}", booking.date, booking.time_slot, err);
                }
                SubmissionOutcome::from_single(result)
            }
            batch => self.submit_batch(batch),
        }
    }

    fn submit_batch(&self, bookings: &[Booking]) -> SubmissionOutcome {
        log::info!("Booking {} slots in {}", bookings.len(), bookings[0].room_name);

        let api: &dyn BookingApi = self.api.as_ref();
        let results: Vec<Result<(), BookingError>> = thread::scope(|scope| {
            let handles: Vec<_> = bookings
                .iter()
                .map(|booking| scope.spawn(move || api.create_booking(booking)))
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        Err(BookingError::Connection("booking worker panicked".to_string()))
                    })
                })
                .collect()
        });

        let mut failed = 0;
        let mut unreachable = 0;
        for (booking, result) in bookings.iter().zip(&results) {
            if let Err(err) = result {
                failed += 1;
                if err.is_connection() {
                    unreachable += 1;
                }
                log::warn!("Booking {} {} failed: {}", booking.date, booking.time_slot, err);
            }
        }

        if failed == 0 {
            SubmissionOutcome::Booked {
                count: bookings.len(),
            }
        } else if unreachable == bookings.len() {
            SubmissionOutcome::ConnectionFailed
        } else {
            SubmissionOutcome::PartiallyFailed {
                succeeded: bookings.len() - failed,
                failed,
            }
        }
    }

    /// Run `submit` on a worker thread; the outcome arrives on the receiver.
    pub fn spawn(&self, room: &'static Room, slots: Vec<SelectionSlot>) -> Receiver<SubmissionOutcome> {
        let (tx, rx) = mpsc::channel();
        let submitter = self.clone();
        thread::spawn(move || {
            let _ = tx.send(submitter.submit(room, &slots));
            if let Some(hook) = &submitter.on_result {
                hook();
            }
        });
        rx
    }
}
