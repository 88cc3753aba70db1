//! In-memory transit API for testing without network access.
//!
//! Responses are registered up front and served as if they came from the
//! live API. Every departures and routes query is recorded so tests can
//! assert on the parameters that would have been sent.

use std::collections::HashMap;
use std::sync::Mutex;

use super::client::{DepartureQuery, RouteQuery, TransitApi};
use super::error::MvgError;
use super::types::{Departure, Route, Station};

/// Mock transit API serving canned responses.
#[derive(Default)]
pub struct MockTransitApi {
    /// Search results keyed by lowercased query text.
    searches: HashMap<String, Vec<Station>>,
    /// Departures keyed by station global id.
    departures: HashMap<String, Vec<Departure>>,
    /// Routes keyed by (origin, destination) global ids.
    routes: HashMap<(String, String), Vec<Route>>,
    /// When set, every call fails with this status.
    fail_status: Option<u16>,
    departure_queries: Mutex<Vec<DepartureQuery>>,
    route_queries: Mutex<Vec<RouteQuery>>,
    search_count: Mutex<usize>,
}

impl MockTransitApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the result list for a station search.
    pub fn with_search(mut self, query: &str, stations: Vec<Station>) -> Self {
        self.searches.insert(query.to_lowercase(), stations);
        self
    }

    /// Register a single station, found by its exact name.
    pub fn with_station(self, name: &str, global_id: &str) -> Self {
        let station = Station {
            name: name.to_string(),
            global_id: global_id.to_string(),
        };
        self.with_search(name, vec![station])
    }

    pub fn with_departures(mut self, global_id: &str, departures: Vec<Departure>) -> Self {
        self.departures.insert(global_id.to_string(), departures);
        self
    }

    pub fn with_routes(mut self, origin_id: &str, destination_id: &str, routes: Vec<Route>) -> Self {
        self.routes
            .insert((origin_id.to_string(), destination_id.to_string()), routes);
        self
    }

    /// Make every call fail with the given HTTP status.
    pub fn failing(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    /// Departure queries received so far.
    pub fn departure_queries(&self) -> Vec<DepartureQuery> {
        lock(&self.departure_queries).clone()
    }

    /// Route queries received so far.
    pub fn route_queries(&self) -> Vec<RouteQuery> {
        lock(&self.route_queries).clone()
    }

    /// Number of station searches performed.
    pub fn search_count(&self) -> usize {
        *lock(&self.search_count)
    }

    fn check_failure(&self) -> Result<(), MvgError> {
        match self.fail_status {
            Some(status) => Err(MvgError::Api {
                status,
                message: "mock failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Recovers the guard from a poisoned lock.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

fn not_found(what: String) -> MvgError {
    MvgError::Api {
        status: 404,
        message: format!("no mock data for {what}"),
    }
}

impl TransitApi for MockTransitApi {
    async fn search_stations(&self, query: &str) -> Result<Vec<Station>, MvgError> {
        *lock(&self.search_count) += 1;
        self.check_failure()?;
        Ok(self
            .searches
            .get(&query.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    async fn departures(&self, query: &DepartureQuery) -> Result<Vec<Departure>, MvgError> {
        lock(&self.departure_queries).push(query.clone());
        self.check_failure()?;
        self.departures
            .get(&query.global_id)
            .cloned()
            .ok_or_else(|| not_found(format!("departures at {}", query.global_id)))
    }

    async fn routes(&self, query: &RouteQuery) -> Result<Vec<Route>, MvgError> {
        lock(&self.route_queries).push(query.clone());
        self.check_failure()?;
        let key = (query.origin_id.clone(), query.destination_id.clone());
        self.routes.get(&key).cloned().ok_or_else(|| {
            not_found(format!(
                "routes {} -> {}",
                query.origin_id, query.destination_id
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_is_case_insensitive_on_query() {
        let api = MockTransitApi::new().with_station("Marienplatz", "de:09162:2");
        let found = api.search_stations("marienplatz").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].global_id, "de:09162:2");
        assert_eq!(api.search_count(), 1);
    }

    #[tokio::test]
    async fn unknown_search_returns_empty() {
        let api = MockTransitApi::new();
        assert!(api.search_stations("Nowhere").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failing_mock_returns_api_error() {
        let api = MockTransitApi::new()
            .with_station("Marienplatz", "de:09162:2")
            .failing(502);
        let err = api.search_stations("Marienplatz").await.unwrap_err();
        assert!(matches!(err, MvgError::Api { status: 502, .. }));
    }
}
