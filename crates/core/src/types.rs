/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Timestamp layout expected by the storefront frontend (`2024-05-01 13:45:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serde adapter rendering a [`Timestamp`] with [`TIMESTAMP_FORMAT`].
///
/// Use as `#[serde(serialize_with = "display_timestamp::serialize")]`.
pub mod display_timestamp {
    use serde::Serializer;

    use super::{Timestamp, TIMESTAMP_FORMAT};

    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }
}

/// Deserialize `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so absent and `null` fields behave alike:
/// `#[serde(default, deserialize_with = "null_as_default")]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value = <Option<T> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Stamped {
        #[serde(serialize_with = "display_timestamp::serialize")]
        timestamp: Timestamp,
    }

    #[derive(Debug, serde::Deserialize)]
    struct Lenient {
        #[serde(default, deserialize_with = "null_as_default")]
        names: Vec<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        note: String,
    }

    #[test]
    fn null_and_missing_fields_become_defaults() {
        let parsed: Lenient =
            serde_json::from_value(serde_json::json!({ "names": null, "note": null })).unwrap();
        assert!(parsed.names.is_empty());
        assert_eq!(parsed.note, "");

        let parsed: Lenient = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parsed.names.is_empty());

        let parsed: Lenient =
            serde_json::from_value(serde_json::json!({ "names": ["a"], "note": "x" })).unwrap();
        assert_eq!(parsed.names, vec!["a"]);
        assert_eq!(parsed.note, "x");
    }

    #[test]
    fn timestamp_renders_in_frontend_layout() {
        let ts = chrono::Utc.with_ymd_and_hms(2024, 5, 1, 13, 45, 7).unwrap();
        let json = serde_json::to_value(Stamped { timestamp: ts }).unwrap();
        assert_eq!(json["timestamp"], "2024-05-01 13:45:07");
    }
}
