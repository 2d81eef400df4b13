//! Serde `with` module for `DateTime<Utc>` in the feed's millisecond ISO
//! format. Chrono's default RFC 3339 output varies its fractional-digit
//! count, which breaks byte-for-byte comparison against recorded payloads.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

use super::ISO_MILLIS_FORMAT;

pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(ISO_MILLIS_FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| de::Error::custom(format!("Invalid timestamp {raw:?}: {e:#}")))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Serialize, Debug, PartialEq)]
    struct TestWrapper {
        #[serde(with = "super")]
        pub value: DateTime<Utc>,
    }

    #[test]
    fn test_round_trip_keeps_millisecond_format() {
        let raw = r#"{"value":"2017-02-27T14:23:07.000Z"}"#;
        let deserialized: TestWrapper = serde_json::from_str(raw).unwrap();
        assert_eq!(raw, serde_json::to_string(&deserialized).unwrap());
    }

    #[test]
    fn test_deserialize_offset_is_normalized_to_utc() {
        let deserialized: TestWrapper =
            serde_json::from_str(r#"{"value":"2017-02-27T15:23:07.000+01:00"}"#).unwrap();
        assert_eq!(
            r#"{"value":"2017-02-27T14:23:07.000Z"}"#,
            serde_json::to_string(&deserialized).unwrap()
        );
    }

    #[test]
    fn test_deserialize_garbage_fails() {
        let result: Result<TestWrapper, _> = serde_json::from_str(r#"{"value":"27.02.2017"}"#);
        assert!(result.is_err());
    }
}
