//! MVG API response DTOs.
//!
//! These types map directly to the `bgw-pt/v3` JSON responses. Fields the
//! API may omit or send as `null` are `Option`; everything else is
//! required and a missing value fails deserialization. Timestamps on route
//! parts stay as strings and are parsed by the formatter, which knows
//! how to skip a bad route without losing the rest.

use serde::{Deserialize, Serialize};

use crate::domain::TransportType;

/// A station returned by the `/locations` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Display name, e.g. "Marienplatz".
    pub name: String,

    /// Stable identifier used by the departures and routes endpoints.
    pub global_id: String,
}

/// An entry from the `/departures` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    /// Expected departure as epoch milliseconds.
    pub realtime_departure_time: i64,

    /// Line label, e.g. "U3" or "S8".
    pub label: String,

    pub destination: String,

    pub transport_type: TransportType,

    /// Positive when late, negative when early.
    pub delay_in_minutes: Option<i64>,

    #[serde(default)]
    pub cancelled: bool,
}

impl Departure {
    /// Delay in minutes, treating an absent value as on time.
    pub fn delay(&self) -> i64 {
        self.delay_in_minutes.unwrap_or(0)
    }
}

/// A connection from the `/routes` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Legs in travel order.
    pub parts: Vec<Part>,
}

/// One leg of a route: a ride on a line, or a walk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub from: PartStop,

    pub to: PartStop,

    pub line: Line,

    /// Walking time to the next leg, if the API reports one.
    pub interchange_path_duration_in_minutes: Option<i64>,
}

impl Part {
    /// Whether this leg is a walking connection rather than a transit ride.
    pub fn is_walk(&self) -> bool {
        self.line.transport_type == TransportType::Pedestrian
    }

    /// Interchange walking time, treating absent as zero.
    pub fn interchange_minutes(&self) -> i64 {
        self.interchange_path_duration_in_minutes.unwrap_or(0)
    }
}

/// Start or end point of a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartStop {
    pub name: String,

    /// ISO 8601 timestamp with offset, e.g. "2026-10-19T08:12:00+02:00".
    pub planned_departure: String,

    /// Only meaningful on the arriving end of a leg.
    pub arrival_delay_in_minutes: Option<i64>,
}

/// The line serving a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub transport_type: TransportType,

    /// Empty for walks.
    #[serde(default)]
    pub label: String,
}
