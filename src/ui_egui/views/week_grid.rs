//! The room's week grid: 36 half-hour rows by 7 day columns.
//!
//! Cells translate pointer input into `SelectionEngine` calls. Release is
//! not handled here; the app checks for it once per frame so drags that end
//! outside the grid still finish.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use egui::{Align2, CursorIcon, FontId, Pos2, RichText, Sense, Stroke, Vec2};

use super::palette::GridPalette;
use crate::models::room::Room;
use crate::models::settings::SelectionMode;
use crate::models::time_slot::TIME_SLOTS;
use crate::services::availability::AvailabilityCache;
use crate::services::selection::SelectionEngine;
use crate::services::week::{WeekWindow, WEEKDAY_LABELS};
use crate::utils::date::short_day_label;

pub const TIME_LABEL_WIDTH: f32 = 56.0;
pub const COLUMN_SPACING: f32 = 1.0;
pub const SLOT_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 40.0;
const MIN_COLUMN_WIDTH: f32 = 60.0;

/// Everything a cell needs to decide how to draw and react.
struct CellContext<'a> {
    cache: &'a AvailabilityCache,
    room: &'a Room,
    palette: &'a GridPalette,
    today: NaiveDate,
    col_width: f32,
}

/// Draw the grid and feed pointer input to `selection`.
pub fn render_week_grid(
    ui: &mut egui::Ui,
    week: &WeekWindow,
    cache: &AvailabilityCache,
    room: &Room,
    selection: &mut SelectionEngine,
    palette: &GridPalette,
) {
    let dates = week.dates();
    // One pass over the booking list per column, not per cell.
    let booked_by_day: Vec<HashSet<&str>> = dates
        .iter()
        .map(|date| cache.booked_slots(room.name, *date))
        .collect();
    let total_spacing = COLUMN_SPACING * (dates.len() as f32 + 1.0);
    let col_width = ((ui.available_width() - TIME_LABEL_WIDTH - total_spacing) / dates.len() as f32)
        .max(MIN_COLUMN_WIDTH);

    let cell = CellContext {
        cache,
        room,
        palette,
        today: Local::now().date_naive(),
        col_width,
    };

    render_header(ui, &dates, &cell);

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;

            for time in TIME_SLOTS {
                let is_hour_start = time.ends_with(":00");

                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;

                    ui.allocate_ui_with_layout(
                        Vec2::new(TIME_LABEL_WIDTH, SLOT_HEIGHT),
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.add_space(6.0);
                            let label = RichText::new(time).size(12.0).color(palette.time_label);
                            ui.label(if is_hour_start { label.strong() } else { label });
                        },
                    );

                    ui.add_space(COLUMN_SPACING);

                    for (day_idx, date) in dates.iter().enumerate() {
                        let is_weekend = day_idx >= 5;
                        let booked = booked_by_day[day_idx].contains(time);
                        render_slot_cell(ui, &cell, selection, *date, time, booked, is_hour_start, is_weekend);
                        ui.add_space(COLUMN_SPACING);
                    }
                });
            }
        });
}

fn render_header(ui: &mut egui::Ui, dates: &[NaiveDate], cell: &CellContext<'_>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.allocate_ui_with_layout(
            Vec2::new(TIME_LABEL_WIDTH, HEADER_HEIGHT),
            egui::Layout::centered_and_justified(egui::Direction::TopDown),
            |ui| {
                ui.label(RichText::new("🕐").size(16.0));
            },
        );
        ui.add_space(COLUMN_SPACING);

        for (day_idx, date) in dates.iter().enumerate() {
            ui.allocate_ui_with_layout(
                Vec2::new(cell.col_width, HEADER_HEIGHT),
                egui::Layout::top_down(egui::Align::Center),
                |ui| {
                    let weekday = RichText::new(WEEKDAY_LABELS[day_idx]).strong();
                    ui.label(if *date == cell.today {
                        weekday.color(cell.palette.accent)
                    } else {
                        weekday
                    });
                    ui.label(RichText::new(short_day_label(*date)).size(11.0).weak());
                },
            );
            ui.add_space(COLUMN_SPACING);
        }
    });
}

#[allow(clippy::too_many_arguments)]
fn render_slot_cell(
    ui: &mut egui::Ui,
    cell: &CellContext<'_>,
    selection: &mut SelectionEngine,
    date: NaiveDate,
    time: &'static str,
    booked: bool,
    is_hour_start: bool,
    is_weekend: bool,
) {
    let palette = cell.palette;
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(cell.col_width, SLOT_HEIGHT), Sense::click_and_drag());

    let selected = selection.is_selected(date, time);

    let bg_color = if booked {
        palette.booked_bg
    } else if selected {
        palette.selected_bg
    } else if date == cell.today {
        palette.today_bg
    } else if is_weekend {
        palette.weekend_bg
    } else {
        palette.free_bg
    };
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, bg_color);

    let line_color = if is_hour_start {
        palette.hour_line
    } else {
        palette.slot_line
    };
    painter.line_segment(
        [Pos2::new(rect.left(), rect.top()), Pos2::new(rect.right(), rect.top())],
        Stroke::new(1.0, line_color),
    );
    painter.line_segment(
        [Pos2::new(rect.right(), rect.top()), Pos2::new(rect.right(), rect.bottom())],
        Stroke::new(1.0, palette.divider),
    );

    let interactive = !selection.is_dialog_open();
    if booked {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "✓",
            FontId::proportional(14.0),
            palette.booked_mark,
        );
        if response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::NotAllowed);
        }
    } else if interactive && response.hovered() && !selection.is_selecting() {
        painter.rect_filled(rect, 0.0, palette.hover_overlay);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "+",
            FontId::proportional(14.0),
            palette.accent,
        );
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }

    if !interactive {
        return;
    }

    match selection.mode() {
        SelectionMode::Single => {
            if response.clicked() {
                selection.click(cell.cache, cell.room, date, time);
            }
        }
        SelectionMode::Drag => {
            if response.hovered() && ui.input(|i| i.pointer.primary_pressed()) {
                selection.pointer_down(cell.cache, cell.room, date, time);
            }

            // While a drag is active other widgets report no hover, so test
            // the raw pointer position against the cell.
            let pointer_inside = ui
                .input(|i| i.pointer.hover_pos())
                .is_some_and(|pos| rect.contains(pos));
            if selection.is_selecting() && pointer_inside {
                selection.pointer_enter(cell.cache, cell.room, date, time);
            }
        }
    }

    if booked {
        response.on_hover_text(format!("Booked: {} {}", short_day_label(date), time));
    }
}
