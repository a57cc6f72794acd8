//! Monday-aligned week windows for the booking grid.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::utils::date::short_day_label;

pub const DAYS_IN_WEEK: usize = 7;
pub const WEEKDAY_LABELS: [&str; DAYS_IN_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Seven consecutive dates starting on a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: NaiveDate,
}

/// Monday of the week containing `pivot`.
///
/// Sunday counts as the last day of the week, not the first.
pub fn week_start(pivot: NaiveDate) -> NaiveDate {
    let weekday = pivot.weekday().num_days_from_sunday() as i64;
    let offset = if weekday == 0 { -6 } else { 1 - weekday };
    pivot + Duration::days(offset)
}

impl WeekWindow {
    pub fn containing(pivot: NaiveDate) -> Self {
        Self {
            start: week_start(pivot),
        }
    }

    /// The week containing today's local date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(DAYS_IN_WEEK as i64 - 1)
    }

    pub fn dates(&self) -> [NaiveDate; DAYS_IN_WEEK] {
        let mut dates = [self.start; DAYS_IN_WEEK];
        for (offset, date) in dates.iter_mut().enumerate() {
            *date = self.start + Duration::days(offset as i64);
        }
        dates
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    pub fn next(&self) -> Self {
        Self {
            start: self.start + Duration::days(DAYS_IN_WEEK as i64),
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            start: self.start - Duration::days(DAYS_IN_WEEK as i64),
        }
    }

    /// Header text, e.g. `3 Mar - 9 Mar`.
    pub fn label(&self) -> String {
        format!("{} - {}", short_day_label(self.start), short_day_label(self.end()))
    }
}
