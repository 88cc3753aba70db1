//! Station resolution.
//!
//! Turns a free-text station name into the [`Station`](crate::mvg::Station)
//! whose global id the departures and routes endpoints need.

mod error;
mod resolve;

pub use error::StationError;
pub use resolve::{find_station, select_station};
