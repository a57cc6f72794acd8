use std::time::Instant;

use super::BookingApp;
use crate::services::availability::RefreshPoll;

impl BookingApp {
    /// Pick up a finished booking-list fetch and start the next one if due.
    ///
    /// Failures keep the previous list on screen and are only logged.
    pub(super) fn poll_availability(&mut self, now: Instant) {
        if let RefreshPoll::Updated { count } = self.refresher.poll(&mut self.cache, now) {
            log::debug!("Grid now shows {} bookings", count);
        }
    }
}
