use egui::{Color32, Visuals};

pub fn parse_color(hex: &str) -> Option<Color32> {
    if hex.is_empty() {
        return None;
    }

    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color32::from_rgb(r, g, b))
}

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colors for the booking grid, derived from the egui visuals and the
/// active room's accent.
#[derive(Clone, Copy)]
pub(crate) struct GridPalette {
    pub free_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub booked_bg: Color32,
    pub booked_mark: Color32,
    pub selected_bg: Color32,
    pub hover_overlay: Color32,
    pub hour_line: Color32,
    pub slot_line: Color32,
    pub divider: Color32,
    pub time_label: Color32,
    pub accent: Color32,
}

impl GridPalette {
    pub fn new(visuals: &Visuals, accent_hex: &str) -> Self {
        let accent = parse_color(accent_hex).unwrap_or(visuals.selection.bg_fill);
        let is_dark = visuals.dark_mode;
        let base = visuals.extreme_bg_color;
        let stroke = visuals.widgets.noninteractive.bg_stroke.color;

        Self {
            free_bg: base,
            weekend_bg: visuals.faint_bg_color,
            today_bg: with_alpha(accent, if is_dark { 28 } else { 18 }),
            booked_bg: if is_dark {
                Color32::from_rgb(30, 70, 40)
            } else {
                Color32::from_rgb(210, 245, 215)
            },
            booked_mark: if is_dark {
                Color32::from_rgb(100, 220, 120)
            } else {
                Color32::from_rgb(30, 120, 50)
            },
            selected_bg: with_alpha(accent, if is_dark { 150 } else { 120 }),
            hover_overlay: with_alpha(accent, 40),
            hour_line: stroke,
            slot_line: with_alpha(stroke, 90),
            divider: stroke,
            time_label: Color32::GRAY,
            accent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#F97316"), Some(Color32::from_rgb(0xF9, 0x73, 0x16)));
        assert_eq!(parse_color("0EA5E9"), Some(Color32::from_rgb(0x0E, 0xA5, 0xE9)));
        assert_eq!(parse_color("#FFF"), None);
        assert_eq!(parse_color("#GG0000"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_parse_color_rejects_multibyte_text() {
        assert_eq!(parse_color("aéaaa"), None);
        assert_eq!(parse_color("#₽abc"), None);
    }

    #[test]
    fn test_invalid_accent_falls_back_to_selection_color() {
        let visuals = Visuals::dark();
        let palette = GridPalette::new(&visuals, "not-a-color");
        assert_eq!(palette.accent, visuals.selection.bg_fill);
    }
}
