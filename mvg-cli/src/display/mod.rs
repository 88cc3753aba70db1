//! Terminal presentation.
//!
//! Converts raw API responses into time-relative rows and lays them out
//! as tables. Formatting is pure given the data and the current instant;
//! the caller supplies `now` so that output is reproducible in tests.

mod delay;
mod departures;
mod routes;
pub mod style;
mod table;

pub use delay::{CANCELLED_MARKER, DelayMark};
pub use departures::{DepartureRow, MAX_DEPARTURES, departures_table, format_departures};
pub use routes::{
    Change, ConversionError, Leg, MAX_ROUTES, RouteRow, WALK_LABEL, arrival_delay, format_route,
    format_routes, routes_table,
};
pub use style::{Color, Style, Styled};
pub use table::{Align, Cell, CellLine, Table};
