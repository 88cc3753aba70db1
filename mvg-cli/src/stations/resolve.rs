//! Exact-name station lookup.

use tracing::debug;

use crate::mvg::{Station, TransitApi};

use super::error::StationError;

/// How many search results to offer when nothing matches exactly.
const MAX_SUGGESTIONS: usize = 5;

/// Pick the first candidate whose name equals `name`, ignoring case.
///
/// Prefix and substring matches are rejected. On failure the first
/// [`MAX_SUGGESTIONS`] candidates are returned, in the order given.
pub fn select_station(name: &str, candidates: Vec<Station>) -> Result<Station, StationError> {
    let wanted = name.to_lowercase();

    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);
    for station in candidates {
        if station.name.to_lowercase() == wanted {
            return Ok(station);
        }
        if suggestions.len() < MAX_SUGGESTIONS {
            suggestions.push(station.name);
        }
    }

    Err(StationError::NotFound {
        name: name.to_string(),
        suggestions,
    })
}

/// Search for `name` and resolve it to exactly one station.
pub async fn find_station(api: &impl TransitApi, name: &str) -> Result<Station, StationError> {
    let candidates = api.search_stations(name).await?;
    debug!(name, candidates = candidates.len(), "station search");
    select_station(name, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvg::{MockTransitApi, MvgError};

    fn station(name: &str, id: &str) -> Station {
        Station {
            name: name.to_string(),
            global_id: id.to_string(),
        }
    }

    #[test]
    fn exact_match_ignores_case() {
        let candidates = vec![
            station("Marienplatz (Tal)", "de:09162:99"),
            station("MARIENPLATZ", "de:09162:2"),
        ];
        let found = select_station("marienplatz", candidates).unwrap();
        assert_eq!(found.global_id, "de:09162:2");
    }

    #[test]
    fn first_exact_match_wins() {
        let candidates = vec![station("Giesing", "a"), station("giesing", "b")];
        assert_eq!(select_station("Giesing", candidates).unwrap().global_id, "a");
    }

    #[test]
    fn prefix_match_is_rejected() {
        let candidates = vec![station("Odeonsplatz", "de:09162:3")];
        assert!(select_station("Odeon", candidates).is_err());
    }

    #[test]
    fn suggestions_keep_order_and_stop_at_five() {
        let candidates = (1..=7)
            .map(|i| station(&format!("Candidate {i}"), &i.to_string()))
            .collect();
        let err = select_station("Nothing", candidates).unwrap_err();
        match err {
            StationError::NotFound { name, suggestions } => {
                assert_eq!(name, "Nothing");
                assert_eq!(
                    suggestions,
                    vec![
                        "Candidate 1",
                        "Candidate 2",
                        "Candidate 3",
                        "Candidate 4",
                        "Candidate 5"
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn hauptbahnhof_without_exact_match_suggests_candidates() {
        let results = vec![
            station("München Hauptbahnhof", "de:09162:6"),
            station("Hauptbahnhof Nord", "de:09162:7"),
            station("Hauptbahnhof Süd", "de:09162:8"),
            station("Augsburg Hauptbahnhof", "de:09761:100"),
            station("Hauptbahnhof (Bayerstraße)", "de:09162:9"),
            station("Freising Hauptbahnhof", "de:09178:1"),
        ];
        let api = MockTransitApi::new().with_search("Hauptbahnhof", results);

        let err = find_station(&api, "Hauptbahnhof").await.unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Station 'Hauptbahnhof' not found."));
        assert!(message.contains("  - München Hauptbahnhof"));
        assert!(message.contains("  - Hauptbahnhof (Bayerstraße)"));
        assert!(!message.contains("Freising"));
    }

    #[tokio::test]
    async fn api_failure_propagates() {
        let api = MockTransitApi::new().failing(500);
        let err = find_station(&api, "Marienplatz").await.unwrap_err();
        assert!(matches!(err, StationError::Api(MvgError::Api { status: 500, .. })));
    }
}
