//! Field-level normalization for payloads produced by the remote FAQ API.
//!
//! The backend is loosely typed: identifiers arrive as strings or numbers,
//! text, counters and tags may be `null`, and timestamps may lack an offset.
//! These helpers are used with `#[serde(deserialize_with = "...")]` so one
//! odd field never discards an entry. Only a missing or non-scalar `id`
//! rejects it.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(serde_json::Number),
}

/// Accept `"42"` or `42` and normalize to a string.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(text) => text,
        IdRepr::Number(number) => number.to_string(),
    })
}

/// Missing or `null` text reads as empty; numbers and booleans are kept as
/// their JSON text.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => scalar.to_string(),
        _ => String::new(),
    })
}

/// Missing or `null` counters read as 0.
pub fn counter<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Optional counters: only a non-negative integer counts. Strings, floats
/// and `null` read as `None`.
pub fn optional_counter<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.as_ref().and_then(Value::as_u64))
}

/// Missing or `null` tag lists read as empty.
pub fn tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Timestamps are informational: anything unparseable becomes `None`.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) => parse_timestamp(&raw),
        _ => None,
    })
}

/// Parse RFC 3339, falling back to a naive ISO-8601 datetime read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rstest::rstest;

    #[rstest]
    #[case("2024-05-01T10:30:00Z")]
    #[case("2024-05-01T12:30:00+02:00")]
    #[case("2024-05-01T10:30:00")]
    #[case("2024-05-01T10:30:00.1234567")]
    #[case("2024-05-01 10:30:00")]
    fn parses_common_backend_formats(#[case] raw: &str) {
        let parsed = parse_timestamp(raw).expect("timestamp should parse");
        assert_eq!(parsed.year(), 2024);
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.minute(), 30);
    }

    #[derive(Deserialize)]
    struct Loose {
        #[serde(default, deserialize_with = "text")]
        text: String,
        #[serde(default, deserialize_with = "optional_counter")]
        count: Option<u64>,
    }

    #[rstest]
    #[case(r#"{}"#, "", None)]
    #[case(r#"{"text":null,"count":null}"#, "", None)]
    #[case(r#"{"text":"hi","count":3}"#, "hi", Some(3))]
    #[case(r#"{"text":12,"count":"3"}"#, "12", None)]
    #[case(r#"{"text":["x"],"count":-1}"#, "", None)]
    fn lenient_scalars(#[case] raw: &str, #[case] text: &str, #[case] count: Option<u64>) {
        let parsed: Loose = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text, text);
        assert_eq!(parsed.count, count);
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2024-13-45")]
    fn rejects_garbage(#[case] raw: &str) {
        assert!(parse_timestamp(raw).is_none());
    }
}
