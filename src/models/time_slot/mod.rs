//! The fixed half-hour slot sequence shown as grid rows.
//!
//! Index order defines adjacency: a drag selects the contiguous slice of
//! `TIME_SLOTS` between two indices.

use crate::utils::date::{format_clock, parse_clock_label};

/// Length of one slot in minutes.
pub const SLOT_MINUTES: u32 = 30;

pub const TIME_SLOTS: [&str; 36] = [
    "06:00", "06:30", "07:00", "07:30", "08:00", "08:30", "09:00", "09:30",
    "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30",
    "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
    "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30",
    "22:00", "22:30", "23:00", "23:30",
];

/// Position of a slot label in `TIME_SLOTS`.
pub fn slot_index(label: &str) -> Option<usize> {
    TIME_SLOTS.iter().position(|slot| *slot == label)
}

/// Labels between two slot indices inclusive, in either direction.
pub fn slot_range(a: usize, b: usize) -> &'static [&'static str] {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let end = end.min(TIME_SLOTS.len() - 1);
    let start = start.min(end);
    &TIME_SLOTS[start..=end]
}

/// End time of the slot starting at `label`, carrying into the hour.
///
/// The last slot `23:30` ends at `24:00`.
pub fn slot_end_label(label: &str) -> Option<String> {
    let (hour, minute) = parse_clock_label(label)?;
    let total = hour * 60 + minute + SLOT_MINUTES;
    Some(format_clock(total / 60, total % 60))
}
