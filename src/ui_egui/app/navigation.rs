use chrono::Local;
use egui::RichText;

use super::BookingApp;
use crate::services::week::WeekWindow;

impl BookingApp {
    pub(super) fn navigate_previous(&mut self) {
        self.week = self.week.previous();
        self.discard_drag();
    }

    pub(super) fn navigate_next(&mut self) {
        self.week = self.week.next();
        self.discard_drag();
    }

    pub(super) fn jump_to_today(&mut self) {
        self.week = WeekWindow::current();
        self.discard_drag();
    }

    /// A drag in progress refers to cells that are no longer on screen.
    fn discard_drag(&mut self) {
        if self.selection.is_selecting() {
            self.selection.clear();
        }
    }

    pub(super) fn render_week_navigation(&mut self, ui: &mut egui::Ui) {
        let locked = self.selection.is_dialog_open();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!locked, egui::Button::new(RichText::new("◀").size(16.0)))
                .on_hover_text("Previous week")
                .clicked()
            {
                self.navigate_previous();
            }

            ui.label(RichText::new(self.week.label()).size(18.0).strong());

            if ui
                .add_enabled(!locked, egui::Button::new(RichText::new("▶").size(16.0)))
                .on_hover_text("Next week")
                .clicked()
            {
                self.navigate_next();
            }

            ui.add_space(12.0);

            let is_current = self.week.contains(Local::now().date_naive());
            if ui
                .add_enabled(!locked && !is_current, egui::Button::new("Today"))
                .clicked()
            {
                self.jump_to_today();
            }
        });
    }
}
