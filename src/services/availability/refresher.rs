use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::{AvailabilityCache, RefreshScheduler};
use crate::models::booking::Booking;
use crate::services::booking_api::{BookingApi, BookingError};
use crate::services::ResultHook;

/// What happened during one `poll`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshPoll {
    /// Nothing landed this frame
    Idle,
    /// A fetch finished and the cache now holds `count` bookings
    Updated { count: usize },
    /// A fetch finished with an error; the cache was left as it was
    Failed(BookingError),
}

/// Runs scheduled booking-list fetches on worker threads and feeds the
/// results into an `AvailabilityCache`.
///
/// Dropping the refresher stops future fetches. A fetch that is already
/// running finishes on its own thread and its result is discarded.
pub struct AvailabilityRefresher {
    api: Arc<dyn BookingApi>,
    scheduler: RefreshScheduler,
    result_rx: Option<Receiver<Result<Vec<Booking>, BookingError>>>,
    on_result: Option<ResultHook>,
}

impl AvailabilityRefresher {
    pub fn new(api: Arc<dyn BookingApi>, interval: Duration) -> Self {
        Self {
            api,
            scheduler: RefreshScheduler::new(interval),
            result_rx: None,
            on_result: None,
        }
    }

    /// Run `hook` on the worker thread after each fetch result is sent.
    pub fn set_on_result(&mut self, hook: ResultHook) {
        self.on_result = Some(hook);
    }

    pub fn is_in_flight(&self) -> bool {
        self.scheduler.is_in_flight()
    }

    /// Schedule a fetch for the next poll.
    pub fn refresh_now(&mut self) {
        self.scheduler.request_now();
    }

    pub fn next_due_in(&self, now: Instant) -> Duration {
        self.scheduler.next_due_in(now)
    }

    /// Collect a finished fetch, then start a new one if due.
    ///
    /// Should be called once per frame.
    pub fn poll(&mut self, cache: &mut AvailabilityCache, now: Instant) -> RefreshPoll {
        let outcome = self.collect(cache);
        if self.scheduler.tick_at(now) {
            self.spawn_fetch();
        }
        outcome
    }

    fn collect(&mut self, cache: &mut AvailabilityCache) -> RefreshPoll {
        let Some(rx) = &self.result_rx else {
            return RefreshPoll::Idle;
        };

        let outcome = match rx.try_recv() {
            Ok(Ok(bookings)) => {
                let count = bookings.len();
                cache.replace(bookings);
                log::debug!("Booking list refreshed: {} bookings", count);
                RefreshPoll::Updated { count }
            }
            Ok(Err(err)) => {
                log::warn!("Failed to refresh booking list: {}", err);
                RefreshPoll::Failed(err)
            }
            Err(TryRecvError::Empty) => return RefreshPoll::Idle,
            Err(TryRecvError::Disconnected) => {
                log::warn!("Booking list fetch worker exited without a result");
                RefreshPoll::Failed(BookingError::Connection(
                    "fetch worker exited without a result".to_string(),
                ))
            }
        };

        self.result_rx = None;
        self.scheduler.finish();
        outcome
    }

    fn spawn_fetch(&mut self) {
        let (tx, rx) = mpsc::channel();
        self.result_rx = Some(rx);

        let api = Arc::clone(&self.api);
        let on_result = self.on_result.clone();
        thread::spawn(move || {
            let _ = tx.send(api.fetch_bookings());
            if let Some(hook) = on_result {
                hook();
            }
        });
    }
}
