//! Field validation for incoming resources.
//!
//! Every check here is a pure function over caller-supplied values. Nothing in
//! this module touches a collection, so a failed check can never leave a
//! partially created resource behind.
//!
//! ## Rules
//!
//! - **Alarm time**: exactly `HH:MM`, 24-hour clock (`00:00` to `23:59`).
//! - **Alarm URL**: any non-empty string; the player resolves it later.
//! - **Alarm volume**: `0..=100`.
//! - **Podcast / station URL**: an absolute URI with a scheme, made only of
//!   characters RFC 3986 allows. Whitespace and non-ASCII characters must be
//!   percent-encoded by the caller.
//! - **Update interval**: a positive number of seconds.
//! - **Max episodes**: zero or more.

use chrono::NaiveTime;
use thiserror::Error;

/// Why a create request was rejected.
///
/// The display strings are what callers see in the `message` field of an
/// error body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Alarm Time invalid!")]
    AlarmTime(String),

    #[error("Alarm Period invalid!")]
    AlarmPeriod(String),

    #[error("Alarm URL invalid!")]
    AlarmUrl,

    #[error("Alarm Volume invalid!")]
    AlarmVolume(i64),

    #[error("URL invalid: '{0}'")]
    Url(String),

    #[error("Update interval invalid: {0}")]
    UpdateInterval(i64),

    #[error("Max episodes invalid: {0}")]
    MaxEpisodes(i64),

    #[error("Invalid UUID: '{0}'")]
    Id(String),

    #[error("An item with UUID '{0}' already exists")]
    DuplicateId(String),
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Parses a wall-clock alarm time in strict `HH:MM` form.
///
/// ```
/// use roosterapp::validation::parse_alarm_time;
///
/// assert!(parse_alarm_time("06:30").is_ok());
/// assert!(parse_alarm_time("23:59").is_ok());
///
/// assert!(parse_alarm_time("").is_err());
/// assert!(parse_alarm_time("6:30").is_err());
/// assert!(parse_alarm_time("25:34").is_err());
/// assert!(parse_alarm_time("06:30:00").is_err());
/// ```
pub fn parse_alarm_time(time: &str) -> ValidationResult<NaiveTime> {
    let invalid = || ValidationError::AlarmTime(time.to_string());

    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid());
    }

    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| invalid())
}

/// Alarm sources only need to be present.
pub fn check_alarm_url(url: &str) -> ValidationResult<()> {
    if url.trim().is_empty() {
        return Err(ValidationError::AlarmUrl);
    }
    Ok(())
}

pub fn check_alarm_volume(volume: i64) -> ValidationResult<u8> {
    match u8::try_from(volume) {
        Ok(v) if v <= 100 => Ok(v),
        _ => Err(ValidationError::AlarmVolume(volume)),
    }
}

/// Validates a feed or stream URI.
///
/// ```
/// use roosterapp::validation::check_resource_url;
///
/// assert!(check_resource_url("http://armscontrolwonk.libsyn.com/rss").is_ok());
/// assert!(check_resource_url("foo://bar.baz").is_ok());
///
/// assert!(check_resource_url("Not An URL!").is_err());
/// assert!(check_resource_url("Not : # üß !an.url/").is_err());
/// assert!(check_resource_url("http://foo.bar/with space").is_err());
/// ```
pub fn check_resource_url(raw: &str) -> ValidationResult<()> {
    let invalid = || ValidationError::Url(raw.to_string());

    if raw.is_empty() || !raw.chars().all(is_uri_char) {
        return Err(invalid());
    }

    // The url crate rejects relative references and malformed authorities.
    url::Url::parse(raw).map(|_| ()).map_err(|_| invalid())
}

/// Unreserved, reserved and the percent sign of RFC 3986.
fn is_uri_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=%".contains(ch)
}

pub fn check_update_interval(seconds: i64) -> ValidationResult<u32> {
    match u32::try_from(seconds) {
        Ok(s) if s > 0 => Ok(s),
        _ => Err(ValidationError::UpdateInterval(seconds)),
    }
}

pub fn check_max_episodes(max: i64) -> ValidationResult<u32> {
    u32::try_from(max).map_err(|_| ValidationError::MaxEpisodes(max))
}
