// Date utility functions

use chrono::{Datelike, NaiveDate};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// ISO calendar date (`YYYY-MM-DD`) as stored by the booking service.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Short day-and-month label for grid headers, e.g. `3 Mar`.
pub fn short_day_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTH_ABBREVIATIONS[date.month0() as usize])
}

/// Parse an `HH:MM` label into hour and minute.
pub fn parse_clock_label(label: &str) -> Option<(u32, u32)> {
    let (hour, minute) = label.split_once(':')?;
    if hour.len() != 2 || minute.len() != 2 {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Zero-padded `HH:MM`. Hours are not wrapped, so midnight after the last
/// slot renders as `24:00`.
pub fn format_clock(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}
