//! Confirmation dialog shown once a selection is finalized.

use egui::{Color32, Context, RichText};

use super::views::palette::parse_color;
use crate::models::room::Room;
use crate::services::selection::SelectionSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingDialogResult {
    /// Still open, nothing pressed
    Pending,
    Confirmed,
    Cancelled,
}

/// Render the dialog for the current selection.
///
/// While `submitting` is true the confirm button is disabled and the dialog
/// cannot be dismissed, so the same slots are not sent twice.
pub fn render_booking_dialog(
    ctx: &Context,
    room: &Room,
    summary: &SelectionSummary,
    submitting: bool,
) -> BookingDialogResult {
    let mut result = BookingDialogResult::Pending;
    let mut open = true;
    let accent = parse_color(room.accent).unwrap_or(Color32::from_rgb(140, 90, 220));

    egui::Window::new("Booking")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(300.0);
            ui.set_max_width(400.0);
            ui.add_space(6.0);

            egui::Frame::none()
                .fill(accent)
                .rounding(6.0)
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(
                        RichText::new(format!("{} · {}", room.name, room.price_label()))
                            .color(Color32::WHITE)
                            .strong(),
                    );
                });

            ui.add_space(10.0);

            egui::Grid::new("booking_dialog_details")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Date").weak());
                    ui.label(summary.date.format("%A, %-d %B %Y").to_string());
                    ui.end_row();

                    ui.label(RichText::new("Time").weak());
                    ui.label(&summary.time_range);
                    ui.end_row();

                    ui.label(RichText::new("Duration").weak());
                    ui.label(summary.duration_label());
                    ui.end_row();

                    ui.label(RichText::new("Total").weak());
                    ui.label(RichText::new(format!("{}₽", summary.total_price)).strong());
                    ui.end_row();
                });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm_text = if submitting {
                        "Booking..."
                    } else {
                        "Confirm booking"
                    };
                    let confirm_button = egui::Button::new(
                        RichText::new(confirm_text).color(Color32::WHITE).strong(),
                    )
                    .fill(accent);

                    if ui.add_enabled(!submitting, confirm_button).clicked() {
                        result = BookingDialogResult::Confirmed;
                    }

                    ui.add_space(10.0);

                    if ui.add_enabled(!submitting, egui::Button::new("Cancel")).clicked() {
                        result = BookingDialogResult::Cancelled;
                    }

                    if submitting {
                        ui.spinner();
                    }
                });
            });

            ui.add_space(4.0);
        });

    if submitting {
        return BookingDialogResult::Pending;
    }

    if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        result = BookingDialogResult::Cancelled;
    }

    result
}
