// Parsing of client-supplied completion dates.
//
// Accepted forms, tried in order
// - Local timestamp: 2023-08-10T14:30:00 (fractional seconds allowed).
// - Bare date: 2023-08-10, read as midnight.
// - RFC 3339 timestamp with offset or Z: 2023-08-10T14:30:00+02:00, converted to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de::Error};

pub fn parse_date_completed(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    value
        .parse::<NaiveDateTime>()
        .ok()
        .or_else(|| {
            value
                .parse::<NaiveDate>()
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

/// `deserialize_with` target for an optional `dateCompleted` field.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_date_completed(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid dateCompleted {raw:?}"))),
    }
}
