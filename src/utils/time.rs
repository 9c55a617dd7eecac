use chrono::{Datelike, Duration, NaiveDate};

/// Snap a date backward to the Monday of its week
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    // weekday().num_days_from_monday() is 0 for Monday, 6 for Sunday
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Snap a date forward to the Sunday of its week
pub fn sunday_of_week(date: NaiveDate) -> NaiveDate {
    // (6 - num_days_from_monday()) is the number of days left until Sunday
    date + Duration::days((6 - date.weekday().num_days_from_monday()) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_of_week() {
        // 2024-01-10 is a Wednesday
        assert_eq!(monday_of_week(date(2024, 1, 10)), date(2024, 1, 8));
        // A Monday stays put
        assert_eq!(monday_of_week(date(2024, 1, 8)), date(2024, 1, 8));
        // A Sunday snaps back six days
        assert_eq!(monday_of_week(date(2024, 1, 14)), date(2024, 1, 8));
        // Across a month boundary
        assert_eq!(monday_of_week(date(2024, 2, 1)), date(2024, 1, 29));
    }

    #[test]
    fn test_sunday_of_week() {
        // 2024-01-10 is a Wednesday
        assert_eq!(sunday_of_week(date(2024, 1, 10)), date(2024, 1, 14));
        // A Sunday stays put
        assert_eq!(sunday_of_week(date(2024, 1, 14)), date(2024, 1, 14));
        // A Monday snaps forward six days
        assert_eq!(sunday_of_week(date(2024, 1, 8)), date(2024, 1, 14));
        // Across a year boundary
        assert_eq!(sunday_of_week(date(2024, 12, 30)), date(2025, 1, 5));
    }

    #[test]
    fn test_snapped_weekdays() {
        // Every day of an arbitrary week snaps to the same boundaries
        for offset in 0..7 {
            let day = date(2024, 1, 8) + Duration::days(offset);
            assert_eq!(monday_of_week(day).weekday(), Weekday::Mon);
            assert_eq!(sunday_of_week(day).weekday(), Weekday::Sun);
            assert_eq!(monday_of_week(day), date(2024, 1, 8));
            assert_eq!(sunday_of_week(day), date(2024, 1, 14));
        }
    }
}
