//! Top-level error type and exit codes.

use crate::config::ConfigError;
use crate::domain::InputError;
use crate::favorites::FavoritesError;
use crate::mvg::MvgError;
use crate::stations::StationError;

/// Exit code for usage and input mistakes.
pub const EXIT_USAGE: u8 = 2;

/// Exit code for everything else.
pub const EXIT_FAILURE: u8 = 1;

/// Any failure that ends an invocation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    Api(#[from] MvgError),

    #[error(transparent)]
    Favorites(#[from] FavoritesError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Neither a station nor a favorites action was given
    #[error("missing required option '--from <NAME>'")]
    MissingOrigin,
}

impl AppError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Input(_) | AppError::MissingOrigin => EXIT_USAGE,
            AppError::Station(_)
            | AppError::Api(_)
            | AppError::Favorites(_)
            | AppError::Config(_) => EXIT_FAILURE,
        }
    }
}
