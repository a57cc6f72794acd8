use std::sync::mpsc::TryRecvError;

use super::BookingApp;
use crate::services::reservation::SubmissionOutcome;

impl BookingApp {
    pub(super) fn is_submitting(&self) -> bool {
        self.submission_rx.is_some()
    }

    /// Send the current selection on a worker thread.
    pub(super) fn start_submission(&mut self) {
        if self.is_submitting() || self.selection.slots().is_empty() {
            return;
        }
        let slots = self.selection.slots().to_vec();
        self.submission_rx = Some(self.submitter.spawn(self.room, slots));
    }

    /// Apply a finished submission: toast, then either clear and refresh or
    /// keep the dialog open for a retry.
    pub(super) fn poll_submission(&mut self) {
        let Some(rx) = &self.submission_rx else {
            return;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                log::error!("Booking worker exited without reporting a result");
                SubmissionOutcome::ConnectionFailed
            }
        };
        self.submission_rx = None;

        log::info!("Submission finished: {:?}", outcome);
        if let Some((level, message)) = outcome.notification() {
            self.toast_manager.push(level.into(), message);
        }

        self.selection.complete_submission(&outcome);
        if outcome.is_success() {
            self.refresher.refresh_now();
        }
    }
}
