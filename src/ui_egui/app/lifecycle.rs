use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use super::toast::ToastManager;
use super::BookingApp;
use crate::models::settings::Settings;
use crate::services::availability::{AvailabilityCache, AvailabilityRefresher};
use crate::services::booking_api::{BookingApi, HttpBookingClient};
use crate::services::reservation::ReservationSubmitter;
use crate::services::selection::SelectionEngine;
use crate::services::week::WeekWindow;

impl BookingApp {
    /// Build the app against the HTTP booking service named in `settings`.
    pub fn new(settings: Settings) -> Result<Self> {
        let client = HttpBookingClient::new(
            &settings.service_url,
            Duration::from_secs(settings.request_timeout_secs),
        )
        .context("Failed to set up booking service client")?;

        log::info!("Using booking service at {}", client.url());
        Ok(Self::with_api(settings, Arc::new(client)))
    }

    /// Build the app against any booking service implementation.
    pub fn with_api(settings: Settings, api: Arc<dyn BookingApi>) -> Self {
        let room = settings.initial_room();
        let interval = Duration::from_millis(settings.poll_interval_ms);
        log::info!(
            "Booking grid ready: room='{}', mode={:?}, refresh every {} ms",
            room.name,
            settings.selection_mode,
            settings.poll_interval_ms
        );

        Self {
            room,
            week: WeekWindow::current(),
            cache: AvailabilityCache::new(),
            refresher: AvailabilityRefresher::new(Arc::clone(&api), interval),
            selection: SelectionEngine::new(settings.selection_mode),
            submitter: ReservationSubmitter::new(api),
            submission_rx: None,
            toast_manager: ToastManager::new(),
            settings,
        }
    }

    /// Wake the frame loop as soon as a fetch or submission result arrives
    /// instead of waiting for the next scheduled repaint.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        let fetch_ctx = ctx.clone();
        self.refresher
            .set_on_result(Arc::new(move || fetch_ctx.request_repaint()));
        self.submitter
            .set_on_result(Arc::new(move || ctx.request_repaint()));
    }
}
