mod lifecycle;
mod navigation;
mod refresh;
mod room_picker;
mod submission;
mod toast;

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use self::toast::ToastManager;
use crate::models::room::Room;
use crate::models::settings::Settings;
use crate::services::availability::{AvailabilityCache, AvailabilityRefresher};
use crate::services::reservation::{ReservationSubmitter, SubmissionOutcome};
use crate::services::selection::SelectionEngine;
use crate::services::week::WeekWindow;
use crate::ui_egui::booking_dialog::{render_booking_dialog, BookingDialogResult};
use crate::ui_egui::views::{render_week_grid, GridPalette};

/// Upper bound on how long the frame loop sleeps between repaints.
const MAX_IDLE_REPAINT: Duration = Duration::from_secs(1);

pub struct BookingApp {
    settings: Settings,
    /// Room whose grid is shown and which new bookings go to
    room: &'static Room,
    week: WeekWindow,
    /// Last booking list received from the service
    cache: AvailabilityCache,
    refresher: AvailabilityRefresher,
    selection: SelectionEngine,
    submitter: ReservationSubmitter,
    /// Outcome channel of the submission currently in flight
    submission_rx: Option<Receiver<SubmissionOutcome>>,
    toast_manager: ToastManager,
}

impl eframe::App for BookingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll_availability(now);
        self.poll_submission();

        egui::TopBottomPanel::top("booking_header").show(ctx, |ui| {
            ui.add_space(8.0);
            self.render_header(ui);
            ui.add_space(8.0);
        });

        egui::TopBottomPanel::bottom("booking_legend").show(ctx, |ui| {
            self.render_legend(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_week_navigation(ui);
            ui.add_space(6.0);

            let palette = GridPalette::new(ui.visuals(), self.room.accent);
            render_week_grid(
                ui,
                &self.week,
                &self.cache,
                self.room,
                &mut self.selection,
                &palette,
            );
        });

        // Release anywhere in the window ends a drag, even off the grid.
        if self.selection.is_selecting() && ctx.input(|i| i.pointer.any_released()) {
            self.selection.pointer_up();
        }

        self.render_dialog(ctx);
        self.toast_manager.render(ctx, ctx.style().visuals.dark_mode);

        let wait = self.refresher.next_due_in(Instant::now());
        let wait = if self.submission_rx.is_some() {
            Duration::from_millis(100)
        } else {
            wait.min(MAX_IDLE_REPAINT)
        };
        ctx.request_repaint_after(wait);
    }
}

impl BookingApp {
    fn render_dialog(&mut self, ctx: &egui::Context) {
        if !self.selection.is_dialog_open() {
            return;
        }
        let Some(summary) = self.selection.summary(self.room) else {
            self.selection.close_dialog();
            return;
        };

        match render_booking_dialog(ctx, self.room, &summary, self.is_submitting()) {
            BookingDialogResult::Confirmed => self.start_submission(),
            BookingDialogResult::Cancelled => self.selection.close_dialog(),
            BookingDialogResult::Pending => {}
        }
    }

    fn render_legend(&self, ui: &mut egui::Ui) {
        let palette = GridPalette::new(ui.visuals(), self.room.accent);
        ui.horizontal(|ui| {
            for (color, label) in [
                (palette.booked_bg, "Booked"),
                (palette.free_bg, "Free"),
                (palette.selected_bg, "Selected"),
            ] {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, color);
                ui.painter()
                    .rect_stroke(rect, 3.0, egui::Stroke::new(1.0, palette.divider));
                ui.label(label);
                ui.add_space(12.0);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let status = match self.cache.refreshed_at() {
                    Some(at) => format!("Updated {}s ago", at.elapsed().as_secs()),
                    None => "Loading bookings...".to_string(),
                };
                ui.label(egui::RichText::new(status).weak().size(11.0));
            });
        });
    }
}
