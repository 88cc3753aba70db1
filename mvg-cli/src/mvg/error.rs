//! MVG client error types.

/// Errors from the MVG HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum MvgError {
    /// Network failure, timeout, or client construction failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected schema
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MvgError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = MvgError::Json {
            message: "missing field `label`".into(),
            body: Some("[{}]".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: missing field `label` (body: [{}])"
        );

        let err = MvgError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }
}
