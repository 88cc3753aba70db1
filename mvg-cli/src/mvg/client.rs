//! MVG HTTP client.
//!
//! Thin GET wrappers over the three `bgw-pt/v3` endpoints. There is no
//! retry: any non-success status surfaces as [`MvgError::Api`].

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{ChangeSpeed, TransportTypes};

use super::error::MvgError;
use super::types::{Departure, Route, Station};

/// Default base URL for the MVG API.
pub const DEFAULT_BASE_URL: &str = "https://www.mvg.de/api/bgw-pt/v3";

/// Default number of departures requested.
pub const DEFAULT_DEPARTURE_LIMIT: u32 = 10;

/// Route selection strategy; the CLI always asks for the fastest.
const ROUTE_TYPE: &str = "LEAST_TIME";

/// Configuration for the MVG client.
#[derive(Debug, Clone)]
pub struct MvgConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MvgConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing or a proxy).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MvgConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for the `/departures` endpoint.
#[derive(Debug, Clone)]
pub struct DepartureQuery {
    pub global_id: String,
    pub limit: u32,
    pub transport_types: TransportTypes,
    /// Minutes into the future; `None` means "now".
    pub offset_minutes: Option<i64>,
}

impl DepartureQuery {
    /// Query parameters in request order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("globalId", self.global_id.clone()),
            ("limit", self.limit.to_string()),
            ("transportTypes", self.transport_types.to_param()),
        ];
        if let Some(offset) = self.offset_minutes {
            params.push(("offsetInMinutes", offset.to_string()));
        }
        params
    }
}

/// Parameters for the `/routes` endpoint.
///
/// Routing is always depart-after; arrive-by is not supported.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    pub origin_id: String,
    pub destination_id: String,
    pub routing_date_time: DateTime<Utc>,
    pub transport_types: TransportTypes,
    pub change_speed: ChangeSpeed,
}

impl RouteQuery {
    /// Query parameters in request order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("originStationGlobalId", self.origin_id.clone()),
            ("destinationStationGlobalId", self.destination_id.clone()),
            (
                "routingDateTime",
                self.routing_date_time
                    .format("%Y-%m-%dT%H:%M:%S.000Z")
                    .to_string(),
            ),
            ("routingDateTimeIsArrival", "false".to_string()),
            ("transportTypes", self.transport_types.to_param()),
            ("changeSpeed", self.change_speed.as_str().to_string()),
            ("routeType", ROUTE_TYPE.to_string()),
        ]
    }
}

/// Source of stations, departures and routes.
///
/// Implemented by [`MvgClient`] against the live API and by
/// `MockTransitApi` in tests.
#[allow(async_fn_in_trait)]
pub trait TransitApi {
    /// Search stations matching `query`, in the API's relevance order.
    async fn search_stations(&self, query: &str) -> Result<Vec<Station>, MvgError>;

    /// Upcoming departures, ordered by departure time.
    async fn departures(&self, query: &DepartureQuery) -> Result<Vec<Departure>, MvgError>;

    /// Candidate connections, ordered by the server.
    async fn routes(&self, query: &RouteQuery) -> Result<Vec<Route>, MvgError>;
}

/// MVG API client.
#[derive(Debug, Clone)]
pub struct MvgClient {
    http: reqwest::Client,
    base_url: String,
}

impl MvgClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MvgConfig) -> Result<Self, MvgError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// GET `{base_url}{path}` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, MvgError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?params, "GET");

        let response = self.http.get(&url).query(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MvgError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "response received");

        serde_json::from_str(&body).map_err(|e| MvgError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl TransitApi for MvgClient {
    async fn search_stations(&self, query: &str) -> Result<Vec<Station>, MvgError> {
        let params = [
            ("query", query.to_string()),
            ("locationTypes", "STATION".to_string()),
        ];
        self.get_json("/locations", &params).await
    }

    async fn departures(&self, query: &DepartureQuery) -> Result<Vec<Departure>, MvgError> {
        self.get_json("/departures", &query.params()).await
    }

    async fn routes(&self, query: &RouteQuery) -> Result<Vec<Route>, MvgError> {
        self.get_json("/routes", &query.params()).await
    }
}
