//! Route summary formatting.
//!
//! Each route becomes one row: when to leave, when you arrive, how long it
//! takes, and the legs in order. Transit legs that end at a change show
//! where you change and, when the API says, how long the walk is.

use chrono::{DateTime, FixedOffset, TimeZone};
use tracing::warn;

use crate::domain::{TransportType, whole_minutes};
use crate::mvg::{Part, Route};

use super::delay::DelayMark;
use super::style::{Style, Styled, line_label};
use super::table::{Align, Cell, CellLine, Table};

/// How many routes are shown.
pub const MAX_ROUTES: usize = 5;

/// Label used for walking connections.
pub const WALK_LABEL: &str = "walk";

/// Error turning a raw route into a row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The route has no legs
    #[error("route has no parts")]
    EmptyRoute,

    /// A planned time wasn't ISO 8601 with an offset
    #[error("invalid timestamp: {0}")]
    InvalidTime(String),
}

/// Where a transit leg ends in a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub station: String,
    /// Walking time to the next platform, when non-zero.
    pub walk_minutes: Option<i64>,
}

/// One leg as shown in the Lines column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leg {
    Walk,
    Transit {
        line: Styled,
        /// `None` on the final leg.
        change: Option<Change>,
    },
}

impl Leg {
    /// Render as a single cell line.
    pub fn to_line(&self) -> CellLine {
        match self {
            Leg::Walk => vec![Styled::new(WALK_LABEL, Style::dim())],
            Leg::Transit { line, change: None } => vec![line.clone()],
            Leg::Transit {
                line,
                change: Some(change),
            } => {
                let note = match change.walk_minutes {
                    Some(mins) => format!(" → {} ({mins} min)", change.station),
                    None => format!(" → {}", change.station),
                };
                vec![line.clone(), Styled::new(note, Style::dim())]
            }
        }
    }
}

/// One formatted route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    /// Whole minutes until the first leg departs, never negative.
    pub minutes_until: i64,
    /// "HH:MM" at the API's offset.
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_minutes: i64,
    pub legs: Vec<Leg>,
    /// Stations where a transit leg hands over to the next leg.
    pub interchanges: Vec<String>,
    pub arrival_delay_minutes: i64,
}

impl RouteRow {
    pub fn delay_mark(&self) -> DelayMark {
        DelayMark::new(self.arrival_delay_minutes, false)
    }
}

fn parse_time(s: &str) -> Result<DateTime<FixedOffset>, ConversionError> {
    DateTime::parse_from_rfc3339(s).map_err(|_| ConversionError::InvalidTime(s.to_string()))
}

/// Format a single route relative to `now`.
pub fn format_route<Tz: TimeZone>(
    route: &Route,
    now: &DateTime<Tz>,
) -> Result<RouteRow, ConversionError> {
    let (first, last) = match (route.parts.first(), route.parts.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(ConversionError::EmptyRoute),
    };

    let departure = parse_time(&first.from.planned_departure)?;
    let arrival = parse_time(&last.to.planned_departure)?;

    let duration_minutes = whole_minutes(arrival.signed_duration_since(departure));
    let minutes_until = whole_minutes(departure.signed_duration_since(now)).max(0);

    let final_idx = route.parts.len() - 1;
    let mut legs = Vec::with_capacity(route.parts.len());
    let mut interchanges = Vec::new();
    for (i, part) in route.parts.iter().enumerate() {
        if part.is_walk() {
            legs.push(Leg::Walk);
            continue;
        }

        let change = (i < final_idx).then(|| {
            interchanges.push(part.to.name.clone());
            Change {
                station: part.to.name.clone(),
                walk_minutes: Some(part.interchange_minutes()).filter(|m| *m != 0),
            }
        });
        legs.push(Leg::Transit {
            line: line_label(&part.line.label, part.line.transport_type),
            change,
        });
    }

    Ok(RouteRow {
        minutes_until,
        departure_time: departure.format("%H:%M").to_string(),
        arrival_time: arrival.format("%H:%M").to_string(),
        duration_minutes,
        legs,
        interchanges,
        arrival_delay_minutes: arrival_delay(&route.parts),
    })
}

/// Arrival delay reported for the route.
///
/// Walks in order over the transit legs and keeps the most recent
/// non-zero delay: a later non-zero value replaces an earlier one, a
/// later zero does not.
pub fn arrival_delay(parts: &[Part]) -> i64 {
    parts
        .iter()
        .filter(|p| p.line.transport_type != TransportType::Pedestrian)
        .filter_map(|p| p.to.arrival_delay_in_minutes)
        .filter(|d| *d != 0)
        .last()
        .unwrap_or(0)
}

/// Format the first [`MAX_ROUTES`] routes, in server order.
///
/// Routes that can't be converted are logged and skipped.
pub fn format_routes<Tz: TimeZone>(routes: &[Route], now: &DateTime<Tz>) -> Vec<RouteRow> {
    routes
        .iter()
        .take(MAX_ROUTES)
        .enumerate()
        .filter_map(|(i, route)| match format_route(route, now) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(route = i, error = %e, "skipping route");
                None
            }
        })
        .collect()
}

/// Lay the rows out as a route table, one leg per line.
pub fn routes_table(origin: &str, destination: &str, rows: &[RouteRow]) -> Table {
    let mut table = Table::new(format!("Routes from {origin} to {destination}"))
        .styled_column("In", Align::Right, Style::bold())
        .column("Departure", Align::Center)
        .column("Arrival", Align::Center)
        .column("Duration", Align::Right)
        .column("Lines", Align::Left)
        .column("Delay", Align::Right)
        .with_row_separators();

    for row in rows {
        table.add_row(
            vec![
                Cell::plain(format!("{} min", row.minutes_until)),
                Cell::plain(row.departure_time.as_str()),
                Cell::plain(row.arrival_time.as_str()),
                Cell::plain(format!("{} min", row.duration_minutes)),
                Cell::multiline(row.legs.iter().map(Leg::to_line).collect()),
                Cell::text(row.delay_mark().styled()),
            ],
            Style::PLAIN,
        );
    }

    table
}
