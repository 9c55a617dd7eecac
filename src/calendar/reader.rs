use crate::error::{parse_error, Error, GridResult};
use chrono::NaiveDate;
use icalendar::{Calendar, CalendarComponent, CalendarDateTime, Component, DatePerhapsTime, Event};
use tracing::debug;

/// Parse a calendar document and return the start dates of its events,
/// sorted ascending.
///
/// Only the date portion of each DTSTART is kept; time-of-day and timezone
/// information play no role in the week grid. Components other than events
/// are skipped, as are events without a start.
pub fn read_event_start_dates(bytes: &[u8]) -> GridResult<Vec<NaiveDate>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| parse_error(&format!("Input is not valid UTF-8: {}", e)))?;

    let calendar: Calendar = text.parse().map_err(Error::Parse)?;

    let mut dates: Vec<NaiveDate> = calendar
        .components
        .iter()
        .filter_map(CalendarComponent::as_event)
        .filter_map(event_start_date)
        .collect();

    if dates.is_empty() {
        return Err(Error::EmptyCalendar);
    }

    dates.sort_unstable();
    debug!("Extracted {} event start dates", dates.len());

    Ok(dates)
}

/// Extract the civil date of an event's start, if it has one
fn event_start_date(event: &Event) -> Option<NaiveDate> {
    match event.get_start()? {
        DatePerhapsTime::Date(date) => Some(date),
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(dt)) => Some(dt.date()),
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => Some(dt.date_naive()),
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, .. }) => {
            Some(date_time.date())
        }
    }
}
