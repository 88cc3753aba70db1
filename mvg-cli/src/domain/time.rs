//! Wall-clock handling for `--at` and the "minutes until" columns.
//!
//! The user types a bare clock time such as `7:45`; it always refers to
//! today in the caller's timezone. Offsets and countdowns are whole
//! minutes, floored, so a departure 59 seconds away reads "0 min".

use chrono::{DateTime, Duration, NaiveTime, TimeZone};

use super::error::InputError;

const MS_PER_MINUTE: i64 = 60_000;

/// Parse a clock time in `H:MM` or `HH:MM` form.
///
/// The hour has one or two digits, the minute exactly two.
///
/// # Examples
///
/// ```
/// use mvg_cli::domain::parse_clock_time;
///
/// assert!(parse_clock_time("23:12").is_ok());
/// assert!(parse_clock_time("7:05").is_ok());
///
/// assert!(parse_clock_time("24:00").is_err());
/// assert!(parse_clock_time("9:60").is_err());
/// assert!(parse_clock_time("9:5").is_err());
/// ```
pub fn parse_clock_time(text: &str) -> Result<NaiveTime, InputError> {
    let invalid = || InputError::InvalidTime(text.to_string());

    let (hour, minute) = text.split_once(':').ok_or_else(invalid)?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return Err(invalid());
    }

    let hour = parse_digits(hour).ok_or_else(invalid)?;
    let minute = parse_digits(minute).ok_or_else(invalid)?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Parse ASCII digits only; `str::parse` would also accept a leading `+`.
fn parse_digits(s: &str) -> Option<u32> {
    s.bytes().try_fold(0u32, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

/// Place `time` on the same calendar day as `now`, in `now`'s timezone.
///
/// Fails if the local time does not exist that day (a DST gap). In a DST
/// fold the earlier instant is chosen.
pub fn clock_time_today<Tz: TimeZone>(
    time: NaiveTime,
    now: &DateTime<Tz>,
) -> Result<DateTime<Tz>, InputError> {
    let local = now.date_naive().and_time(time);
    now.timezone()
        .from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| InputError::InvalidTime(time.format("%H:%M").to_string()))
}

/// [`parse_clock_time`] followed by [`clock_time_today`].
pub fn resolve_clock_time<Tz: TimeZone>(
    text: &str,
    now: &DateTime<Tz>,
) -> Result<DateTime<Tz>, InputError> {
    let time = parse_clock_time(text)?;
    clock_time_today(time, now)
}

/// Scheduling offset for the departures endpoint.
///
/// `Some(minutes)` only when `target` is strictly after `now`; otherwise
/// the server's default of "now" applies and no offset is sent.
pub fn minutes_offset<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> Option<i64> {
    let diff = target.clone().signed_duration_since(now.clone());
    (diff > Duration::zero()).then(|| whole_minutes(diff))
}

/// Whole minutes in `d`, floored towards negative infinity.
pub fn whole_minutes(d: Duration) -> i64 {
    d.num_milliseconds().div_euclid(MS_PER_MINUTE)
}

/// Minutes from `now_ms` until `target_ms` (both epoch milliseconds),
/// floored and clamped at zero.
pub fn minutes_until_ms(target_ms: i64, now_ms: i64) -> i64 {
    target_ms
        .saturating_sub(now_ms)
        .div_euclid(MS_PER_MINUTE)
        .max(0)
}
