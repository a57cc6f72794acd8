//! Toast notifications for booking results.
//!
//! Toasts stack in the bottom-right corner and fade out on their own.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

use crate::services::reservation::NotificationLevel;

const TOAST_WIDTH: f32 = 320.0;
const TOAST_HEIGHT: f32 = 40.0;
const FADE_OUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl From<NotificationLevel> for ToastLevel {
    fn from(level: NotificationLevel) -> Self {
        match level {
            NotificationLevel::Success => ToastLevel::Success,
            NotificationLevel::Error => ToastLevel::Error,
        }
    }
}

impl ToastLevel {
    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
        }
    }

    fn colors(&self, is_dark_theme: bool) -> (Color32, Color32) {
        match (self, is_dark_theme) {
            (ToastLevel::Success, true) => (Color32::from_rgb(30, 70, 40), Color32::from_rgb(100, 220, 120)),
            (ToastLevel::Error, true) => (Color32::from_rgb(80, 30, 30), Color32::from_rgb(255, 120, 120)),
            (ToastLevel::Success, false) => (Color32::from_rgb(220, 255, 220), Color32::from_rgb(30, 120, 50)),
            (ToastLevel::Error, false) => (Color32::from_rgb(255, 220, 220), Color32::from_rgb(180, 40, 40)),
        }
    }

    /// Errors stay up longer so the server's reason can be read.
    fn duration(&self) -> Duration {
        match self {
            ToastLevel::Success => Duration::from_secs(3),
            ToastLevel::Error => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.level.duration()
    }

    fn opacity(&self, now: Instant) -> f32 {
        let remaining = self
            .level
            .duration()
            .saturating_sub(now.duration_since(self.created_at));
        (remaining.as_secs_f32() / FADE_OUT.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, level));
    }

    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        let now = Instant::now();
        self.toasts.retain(|toast| !toast.is_expired(now));
        if self.toasts.is_empty() {
            return;
        }

        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let margin = 12.0;
        let spacing = 6.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity(now);
            let y_offset = (i as f32) * (TOAST_HEIGHT + spacing);
            let pos = Pos2::new(
                screen_rect.right() - TOAST_WIDTH - margin,
                screen_rect.bottom() - TOAST_HEIGHT - margin - y_offset,
            );

            let (bg, fg) = toast.level.colors(is_dark_theme);
            let bg = bg.gamma_multiply(0.9 * opacity);
            let fg = fg.gamma_multiply(opacity);

            egui::Area::new(egui::Id::new(("booking_toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(TOAST_WIDTH - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(fg).strong());
                                ui.label(RichText::new(&toast.message).color(fg));
                            });
                        });
                });
        }
    }
}
