//! Domain types for the MVG command-line client.
//!
//! Pure resolution of user input into the values the API expects:
//! transport-type filters, change speeds and clock times. Nothing here
//! touches the network or the filesystem.

mod error;
mod speed;
mod time;
mod transport;

pub use error::InputError;
pub use speed::{ChangeSpeed, resolve_speed};
pub use time::{
    clock_time_today, minutes_offset, minutes_until_ms, parse_clock_time, resolve_clock_time,
    whole_minutes,
};
pub use transport::{TransportType, TransportTypes, resolve_transport_types, valid_tokens};
