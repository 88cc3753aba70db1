//! Favorites store error types.

use std::path::PathBuf;

/// Errors from reading or writing the favorites file.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// Filesystem operation failed
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exists but is not a flat string-to-string JSON object
    #[error("malformed favorites file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `--delete` named an alias that isn't stored
    #[error("favorite '{0}' not found")]
    UnknownAlias(String),
}
