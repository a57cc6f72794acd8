use std::time::{Duration, Instant};

/// Decides when the booking list should be fetched again.
///
/// Driven by `tick_at` from the frame loop. The first tick is due right away,
/// later ticks every `interval` from the start of the previous fetch. At most
/// one fetch is in flight at a time.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    interval: Duration,
    next_run_at: Option<Instant>,
    in_flight: bool,
}

impl RefreshScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_run_at: None,
            in_flight: false,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Returns true when a fetch should start now, and marks it in flight.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if self.in_flight {
            return false;
        }

        let is_due = self.next_run_at.map_or(true, |next_run_at| now >= next_run_at);
        if !is_due {
            return false;
        }

        self.in_flight = true;
        self.next_run_at = Some(now + self.interval);
        true
    }

    /// The in-flight fetch finished, whatever its result.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    /// Make the next tick due immediately.
    pub fn request_now(&mut self) {
        self.next_run_at = None;
    }

    /// How long the frame loop may sleep before the next tick matters.
    pub fn next_due_in(&self, now: Instant) -> Duration {
        if self.in_flight {
            return self.interval;
        }
        self.next_run_at
            .map(|next_run_at| next_run_at.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }
}
