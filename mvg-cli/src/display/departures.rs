//! Departure board formatting.

use chrono::{DateTime, TimeZone};

use crate::domain::minutes_until_ms;
use crate::mvg::Departure;

use super::delay::DelayMark;
use super::style::{Style, Styled, line_label};
use super::table::{Align, Cell, Table};

/// How many departures a board shows.
pub const MAX_DEPARTURES: usize = 10;

/// Shown when a timestamp is outside chrono's representable range.
const UNKNOWN_CLOCK: &str = "--:--";

/// One formatted departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRow {
    /// Whole minutes from now, never negative.
    pub minutes_until: i64,
    /// "HH:MM" in the caller's timezone.
    pub departure_time: String,
    pub line: Styled,
    pub destination: String,
    pub delay_minutes: i64,
    pub cancelled: bool,
}

impl DepartureRow {
    pub fn delay_mark(&self) -> DelayMark {
        DelayMark::new(self.delay_minutes, self.cancelled)
    }

    /// Cancelled departures are dimmed.
    pub fn row_style(&self) -> Style {
        if self.cancelled {
            Style::dim()
        } else {
            Style::PLAIN
        }
    }
}

/// Format the first [`MAX_DEPARTURES`] departures relative to `now`.
///
/// The API already orders departures by time; they are not re-sorted.
pub fn format_departures<Tz: TimeZone>(
    departures: &[Departure],
    now: &DateTime<Tz>,
) -> Vec<DepartureRow> {
    let now_ms = now.timestamp_millis();
    let tz = now.timezone();

    departures
        .iter()
        .take(MAX_DEPARTURES)
        .map(|dep| DepartureRow {
            minutes_until: minutes_until_ms(dep.realtime_departure_time, now_ms),
            departure_time: clock_time(dep.realtime_departure_time, &tz),
            line: line_label(&dep.label, dep.transport_type),
            destination: dep.destination.clone(),
            delay_minutes: dep.delay(),
            cancelled: dep.cancelled,
        })
        .collect()
}

fn clock_time<Tz: TimeZone>(epoch_ms: i64, tz: &Tz) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(utc) => utc.with_timezone(tz).naive_local().format("%H:%M").to_string(),
        None => UNKNOWN_CLOCK.to_string(),
    }
}

/// Lay the rows out as a departure board.
pub fn departures_table(station_name: &str, rows: &[DepartureRow]) -> Table {
    let mut table = Table::new(format!("Departures from {station_name}"))
        .styled_column("In", Align::Right, Style::bold())
        .column("Departure", Align::Center)
        .column("Line", Align::Left)
        .column("Destination", Align::Left)
        .column("Delay", Align::Right);

    for row in rows {
        table.add_row(
            vec![
                Cell::plain(format!("{} min", row.minutes_until)),
                Cell::plain(row.departure_time.as_str()),
                Cell::text(row.line.clone()),
                Cell::plain(row.destination.as_str()),
                Cell::text(row.delay_mark().styled()),
            ],
            row.row_style(),
        );
    }

    table
}
