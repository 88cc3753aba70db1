//! Input validation errors.
//!
//! These are failures in what the user typed on the command line, as
//! opposed to failures talking to the API or the filesystem.

/// A rejected command-line value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// `--only` contained a token outside the alias table
    #[error("unknown transport type '{token}'. Valid types: {valid}")]
    UnknownTransportType { token: String, valid: String },

    /// `--speed` was not one of the known change speeds
    #[error("unknown change speed '{value}'. Valid speeds: {valid}")]
    UnknownSpeed { value: String, valid: String },

    /// `--at` did not parse as a wall-clock time
    #[error("invalid time '{0}': expected H:MM or HH:MM between 0:00 and 23:59")]
    InvalidTime(String),
}
