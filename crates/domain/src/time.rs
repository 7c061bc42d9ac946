//! Timestamp type and lenient parsing of server-sent date-times.

use chrono::{DateTime, NaiveDateTime, Utc};

/// UTC timestamp used for `last_update`, `added_at`, history entries and polls.
pub type Timestamp = DateTime<Utc>;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a server timestamp.
///
/// Accepts RFC 3339 (any offset, normalised to UTC) as well as naive ISO-8601
/// date-times without an offset, which are taken to be UTC. Returns `None`
/// when the text matches neither form.
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<Timestamp> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Serde helpers for optional timestamps that tolerate naive date-times.
///
/// Use with `#[serde(default, deserialize_with = "lenient::deserialize")]`.
pub mod lenient {
    use serde::{Deserialize, Deserializer};

    use super::{Timestamp, parse_timestamp};

    /// Deserialize `null`, a missing field, or a date-time string.
    ///
    /// # Errors
    ///
    /// Fails only when the value is neither `null` nor a string.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_timestamp))
    }
}
