use crate::burst::AccessEvent;
use chrono::{Datelike, NaiveDateTime};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Layout of the bracketed timestamp in common/combined log format, without the zone.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

/// Years a timestamp may carry. `%Y` alone would also accept signed and longer years.
const YEARS: RangeInclusive<i32> = 0..=9999;

/// Fields needed before a line is considered well formed.
const MIN_FIELDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("expected at least {min} fields, found {found}", min = MIN_FIELDS)]
    TooFewFields { found: usize },

    #[error("invalid timestamp '{token}'")]
    Timestamp { token: String },
}

/// Pulls the client address and request time out of an access log line.
///
/// The address is the first whitespace separated field and the timestamp is the fourth,
/// with its surrounding brackets removed:
///
/// ```text
/// 203.0.113.7 - - [10/Oct/2024:13:55:36 +0000] "POST /wp-login.php HTTP/1.1" 200 ...
/// ```
///
/// The zone offset lives in the fifth field and is not applied; timestamps are taken
/// as UTC. Only four digit years are accepted.
pub fn extract_event(line: &str) -> Result<AccessEvent, ExtractError> {
    let fields: Vec<&str> = line.split_whitespace().take(MIN_FIELDS).collect();
    if fields.len() < MIN_FIELDS {
        return Err(ExtractError::TooFewFields {
            found: fields.len(),
        });
    }

    let token = fields[3].trim_matches(['[', ']']);
    let bad_timestamp = || ExtractError::Timestamp {
        token: token.to_string(),
    };

    let timestamp = NaiveDateTime::parse_from_str(token, TIMESTAMP_FORMAT)
        .map_err(|_| bad_timestamp())?;
    if !YEARS.contains(&timestamp.year()) {
        return Err(bad_timestamp());
    }

    Ok(AccessEvent::new(fields[0], timestamp.and_utc()))
}
