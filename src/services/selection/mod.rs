//! Turning pointer gestures on the grid into a set of slots to reserve.
//!
//! The engine knows nothing about egui: the view translates clicks, presses,
//! hovers and releases into the calls below.

mod summary;

pub use summary::SelectionSummary;

use chrono::NaiveDate;

use crate::models::booking::SelectionSlot;
use crate::models::room::Room;
use crate::models::settings::SelectionMode;
use crate::models::time_slot::{slot_index, slot_range, TIME_SLOTS};
use crate::services::availability::AvailabilityCache;
use crate::services::reservation::SubmissionOutcome;

/// Selection state for the active room.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    mode: SelectionMode,
    anchor: Option<SelectionSlot>,
    slots: Vec<SelectionSlot>,
    selecting: bool,
    dialog_open: bool,
}

impl SelectionEngine {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            anchor: None,
            slots: Vec::new(),
            selecting: false,
            dialog_open: false,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switch interaction mode. Anything in progress is discarded.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode != mode {
            self.mode = mode;
            self.clear();
        }
    }

    pub fn slots(&self) -> &[SelectionSlot] {
        &self.slots
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn is_selected(&self, date: NaiveDate, time: &str) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.date == date && slot.time == time)
    }

    /// Single-pick mode: a click on a free cell selects it and opens the
    /// dialog. Booked cells and unknown labels are ignored.
    pub fn click(&mut self, cache: &AvailabilityCache, room: &Room, date: NaiveDate, time: &str) -> bool {
        if self.mode != SelectionMode::Single || self.dialog_open {
            return false;
        }
        let Some(index) = slot_index(time) else {
            return false;
        };
        if cache.is_booked(room.name, date, time) {
            return false;
        }

        self.anchor = None;
        self.selecting = false;
        self.slots = vec![SelectionSlot::new(date, TIME_SLOTS[index])];
        self.dialog_open = true;
        true
    }

    /// Drag mode: press on a free cell starts a selection anchored there.
    pub fn pointer_down(&mut self, cache: &AvailabilityCache, room: &Room, date: NaiveDate, time: &str) -> bool {
        if self.mode != SelectionMode::Drag || self.dialog_open {
            return false;
        }
        let Some(index) = slot_index(time) else {
            return false;
        };
        if cache.is_booked(room.name, date, time) {
            return false;
        }

        let anchor = SelectionSlot::new(date, TIME_SLOTS[index]);
        self.slots = vec![anchor.clone()];
        self.anchor = Some(anchor);
        self.selecting = true;
        true
    }

    /// Drag mode: the pointer moved over a cell while pressed.
    ///
    /// The selection becomes the contiguous run between the anchor and the
    /// hovered slot, minus anything booked at this moment. Cells in another
    /// date column leave the selection untouched. The anchor itself is kept
    /// from the press even if a refresh has since marked it booked.
    pub fn pointer_enter(&mut self, cache: &AvailabilityCache, room: &Room, date: NaiveDate, time: &str) -> bool {
        if !self.selecting {
            return false;
        }
        let Some(anchor) = &self.anchor else {
            return false;
        };
        if anchor.date != date {
            return false;
        }
        let (Some(anchor_index), Some(hover_index)) = (slot_index(anchor.time), slot_index(time)) else {
            return false;
        };

        let anchor_time = anchor.time;
        self.slots = slot_range(anchor_index, hover_index)
            .iter()
            .copied()
            .filter(|slot| *slot == anchor_time || !cache.is_booked(room.name, date, slot))
            .map(|slot| SelectionSlot::new(date, slot))
            .collect();
        true
    }

    /// Pointer released, on or off the grid. Returns true when the dialog
    /// opened as a result.
    pub fn pointer_up(&mut self) -> bool {
        if !self.selecting {
            return false;
        }
        self.selecting = false;
        self.anchor = None;
        if self.slots.is_empty() {
            return false;
        }
        self.dialog_open = true;
        true
    }

    /// Dialog dismissed without booking: the selection is discarded.
    pub fn close_dialog(&mut self) {
        self.clear();
    }

    /// Apply the result of submitting the current selection.
    ///
    /// Success clears everything; any failure leaves the dialog open with the
    /// selection intact so the user can retry.
    pub fn complete_submission(&mut self, outcome: &SubmissionOutcome) {
        if outcome.is_success() {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.anchor = None;
        self.slots.clear();
        self.selecting = false;
        self.dialog_open = false;
    }

    /// Derived totals for the dialog.
    pub fn summary(&self, room: &Room) -> Option<SelectionSummary> {
        SelectionSummary::from_slots(&self.slots, room)
    }
}
