// Week window properties

use chrono::{Datelike, Duration, Weekday};
use proptest::prelude::*;
use room_booking::services::week::WeekWindow;

use crate::any_date;

proptest! {
    /// The window is seven consecutive days from Monday to Sunday and
    /// contains the pivot date.
    #[test]
    fn prop_week_is_monday_to_sunday(pivot in any_date()) {
        let week = WeekWindow::containing(pivot);
        let dates = week.dates();

        prop_assert_eq!(dates.len(), 7);
        prop_assert_eq!(dates[0].weekday(), Weekday::Mon);
        prop_assert_eq!(dates[6].weekday(), Weekday::Sun);
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        prop_assert!(dates.contains(&pivot));
        prop_assert!(week.contains(pivot));
    }

    #[test]
    fn prop_paging_is_reversible(pivot in any_date()) {
        let week = WeekWindow::containing(pivot);
        prop_assert_eq!(week.next().previous(), week);
        prop_assert_eq!(week.next().start() - week.start(), Duration::days(7));
        prop_assert!(!week.next().contains(pivot));
    }
}
