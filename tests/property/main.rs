// Property-based tests, one module per area

mod availability_properties;
mod selection_properties;
mod week_properties;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use room_booking::models::time_slot::TIME_SLOTS;

pub fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650).prop_map(|offset| NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset))
}

pub fn any_slot() -> impl Strategy<Value = usize> {
    0..TIME_SLOTS.len()
}
