pub mod reader;
pub mod weeks;
pub mod writer;

pub use weeks::{generate_weeks, Week, WeekGrid};

use crate::error::{Error, GridResult};
use tracing::info;

/// Transform a schedule calendar into a week-numbering calendar.
///
/// Pure bytes-in/bytes-out pipeline: parse the input, take the earliest and
/// latest event start dates, partition that span into Monday-Sunday weeks,
/// and render one all-day "Week N" event per week. File access is left to
/// the caller so the whole transformation stays testable in memory.
pub fn build_week_calendar(input: &[u8], color: &str) -> GridResult<Vec<u8>> {
    let dates = reader::read_event_start_dates(input)?;

    // The reader guarantees a non-empty, sorted list
    let (first, last) = match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(Error::EmptyCalendar),
    };

    let grid = generate_weeks(first, last);
    info!(
        "Partitioned {} events ({} to {}) into {} weeks",
        dates.len(),
        first,
        last,
        grid.len()
    );

    writer::render_week_grid(&grid, color)
}
