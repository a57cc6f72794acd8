use egui::{Color32, RichText};

use super::BookingApp;
use crate::models::room::{Room, ROOMS};
use crate::models::settings::SelectionMode;
use crate::ui_egui::views::palette::parse_color;

impl BookingApp {
    /// Switch the grid to another room. Selections belong to one room, so
    /// anything in progress is dropped.
    pub(super) fn select_room(&mut self, room: &'static Room) {
        if self.room.id == room.id {
            return;
        }
        log::info!("Switched to room '{}'", room.name);
        self.room = room;
        self.selection.clear();
    }

    pub(super) fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("✨ SmartMotion").size(24.0).strong());
            ui.add_space(24.0);

            let locked = self.selection.is_dialog_open();
            for room in ROOMS.iter() {
                let is_active = self.room.id == room.id;
                let accent = parse_color(room.accent).unwrap_or(Color32::GRAY);
                let text = RichText::new(format!("{}\n{}", room.name, room.price_label()));
                let button = if is_active {
                    egui::Button::new(text.color(Color32::WHITE).strong()).fill(accent)
                } else {
                    egui::Button::new(text)
                };

                if ui
                    .add_enabled(!locked, button.min_size(egui::vec2(150.0, 44.0)))
                    .clicked()
                {
                    self.select_room(room);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut mode = self.settings.selection_mode;
                ui.add_enabled_ui(!locked, |ui| {
                    egui::ComboBox::from_id_source("selection_mode")
                        .selected_text(mode_label(mode))
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut mode, SelectionMode::Drag, mode_label(SelectionMode::Drag));
                            ui.selectable_value(&mut mode, SelectionMode::Single, mode_label(SelectionMode::Single));
                        });
                });
                if mode != self.settings.selection_mode {
                    log::info!("Selection mode changed to {:?}", mode);
                    self.settings.selection_mode = mode;
                    self.selection.set_mode(mode);
                }
            });
        });
    }
}

fn mode_label(mode: SelectionMode) -> &'static str {
    match mode {
        SelectionMode::Drag => "Drag to select",
        SelectionMode::Single => "Click to book",
    }
}
