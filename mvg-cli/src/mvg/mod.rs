//! MVG (Münchner Verkehrsgesellschaft) API client.
//!
//! Queries the public `bgw-pt/v3` endpoints:
//! - `/locations` for station search
//! - `/departures` for a station's upcoming departures
//! - `/routes` for connections between two stations
//!
//! Responses are decoded into the DTOs in [`types`] and handed to the
//! formatters in [`crate::display`] unchanged.

mod client;
mod error;
#[cfg(test)]
mod mock;
pub mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_DEPARTURE_LIMIT, DepartureQuery, MvgClient, MvgConfig, RouteQuery,
    TransitApi,
};
pub use error::MvgError;
#[cfg(test)]
pub use mock::MockTransitApi;
pub use types::{Departure, Line, Part, PartStop, Route, Station};
