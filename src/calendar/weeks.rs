use crate::utils::time::{monday_of_week, sunday_of_week};
use chrono::{Duration, NaiveDate};

/// Seven consecutive dates running Monday through Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    monday: NaiveDate,
}

impl Week {
    /// Create a week from its Monday; callers must pass a Monday
    fn starting_on(monday: NaiveDate) -> Self {
        debug_assert_eq!(monday, monday_of_week(monday));
        Self { monday }
    }

    /// First day of the week
    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    /// Last day of the week
    pub fn sunday(&self) -> NaiveDate {
        self.monday + Duration::days(6)
    }

    /// Iterate over the seven days of the week in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let monday = self.monday;
        (0..7).map(move |offset| monday + Duration::days(offset))
    }

    /// Check whether a date falls inside the week
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.monday <= date && date <= self.sunday()
    }
}

/// Chronologically ordered, gapless sequence of weeks
pub type WeekGrid = Vec<Week>;

/// Partition the span between two dates into whole Monday-Sunday weeks.
///
/// The first date is snapped backward to its week's Monday and the last
/// forward to its week's Sunday, so every date in between is covered by
/// exactly one week. Expects `first <= last`; the caller derives both from
/// a sorted non-empty list of event dates.
pub fn generate_weeks(first: NaiveDate, last: NaiveDate) -> WeekGrid {
    let start = monday_of_week(first);
    let end = sunday_of_week(last);

    let mut weeks = Vec::new();
    let mut current = start;

    while current <= end {
        weeks.push(Week::starting_on(current));
        current += Duration::days(7);
    }

    weeks
}
