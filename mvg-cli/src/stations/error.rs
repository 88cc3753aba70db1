//! Station resolution error types.

use crate::mvg::MvgError;

/// Errors that can occur when resolving a station name.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The location search failed
    #[error(transparent)]
    Api(#[from] MvgError),

    /// No candidate matched the name exactly
    #[error("{}", not_found_message(.name, .suggestions))]
    NotFound {
        name: String,
        suggestions: Vec<String>,
    },
}

fn not_found_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Station '{name}' not found.");
    if !suggestions.is_empty() {
        message.push_str(" Did you mean one of these?");
        for s in suggestions {
            message.push_str("\n  - ");
            message.push_str(s);
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_suggestions() {
        let err = StationError::NotFound {
            name: "Hauptbahnhof".into(),
            suggestions: vec!["München Hauptbahnhof".into(), "Hauptbahnhof Nord".into()],
        };
        assert_eq!(
            err.to_string(),
            "Station 'Hauptbahnhof' not found. Did you mean one of these?\n  - München Hauptbahnhof\n  - Hauptbahnhof Nord"
        );
    }

    #[test]
    fn not_found_without_suggestions() {
        let err = StationError::NotFound {
            name: "Atlantis".into(),
            suggestions: vec![],
        };
        assert_eq!(err.to_string(), "Station 'Atlantis' not found.");
    }
}
