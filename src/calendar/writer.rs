use crate::calendar::weeks::WeekGrid;
use crate::error::{Error, GridResult};
use icalendar::{Calendar, Component, Event, EventLike, Property};
use tracing::debug;

/// Product identifier carried by the generated calendar
pub const PRODID: &str = "-//Google Inc//Google Calendar 70.9054//EN";

/// iCalendar grammar version of the generated calendar
pub const ICAL_VERSION: &str = "2.0";

/// Vendor property used for the week event color annotation
pub const COLOR_PROPERTY: &str = "X-APPLE-CALENDAR-COLOR";

/// Render a week grid as an iCalendar document.
///
/// Each week becomes one all-day event titled "Week N" (1-based), spanning
/// the week's Monday to its Sunday. The end date is the Sunday itself, not
/// the exclusive day-after bound some calendar applications expect; this
/// matches the documents the tool has always produced.
pub fn render_week_grid(grid: &WeekGrid, color: &str) -> GridResult<Vec<u8>> {
    if grid.is_empty() {
        return Err(Error::Serialization(
            "Week grid contains no weeks".to_string(),
        ));
    }

    // Calendar::new() prefills its own VERSION/PRODID/CALSCALE lines;
    // start from an empty property list so ours are the only ones
    let mut calendar = Calendar::empty();
    calendar.append_property(Property::new("PRODID", PRODID));
    calendar.append_property(Property::new("VERSION", ICAL_VERSION));

    for (index, week) in grid.iter().enumerate() {
        let event = Event::new()
            .summary(&format!("Week {}", index + 1))
            .starts(week.monday())
            .ends(week.sunday())
            .append_property(Property::new(COLOR_PROPERTY, color))
            .done();
        calendar.push(event);
    }

    debug!("Rendered {} week events", grid.len());

    Ok(calendar.to_string().into_bytes())
}
