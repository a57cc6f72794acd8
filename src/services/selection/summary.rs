use chrono::NaiveDate;

use crate::models::booking::SelectionSlot;
use crate::models::room::Room;
use crate::models::time_slot::{slot_end_label, slot_index, SLOT_MINUTES};

/// Values shown in the booking dialog, recomputed from the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary {
    pub date: NaiveDate,
    pub slot_count: usize,
    pub total_price: u32,
    pub duration_minutes: u32,
    /// `HH:MM - HH:MM`, from the earliest start to 30 minutes past the
    /// latest selected slot
    pub time_range: String,
}

impl SelectionSummary {
    /// `None` for an empty selection.
    pub fn from_slots(slots: &[SelectionSlot], room: &Room) -> Option<Self> {
        let mut ordered: Vec<&SelectionSlot> = slots.iter().collect();
        ordered.sort_by_key(|slot| (slot.date, slot_index(slot.time)));

        let first = ordered.first()?;
        let last = ordered.last()?;
        let end = slot_end_label(last.time)?;
        let slot_count = slots.len();

        Some(Self {
            date: first.date,
            slot_count,
            total_price: slot_count as u32 * room.price,
            duration_minutes: slot_count as u32 * SLOT_MINUTES,
            time_range: format!("{} - {}", first.time, end),
        })
    }

    /// Duration for display, e.g. `1 h 30 min`.
    pub fn duration_label(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        match (hours, minutes) {
            (0, m) => format!("{} min", m),
            (h, 0) => format!("{} h", h),
            (h, m) => format!("{} h {} min", h, m),
        }
    }
}
