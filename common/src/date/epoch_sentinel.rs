//! Serde `with` module for `Option<DateTime<Utc>>` where the wire marks
//! "not yet" with `1970-01-01T00:00:00.000Z` instead of omitting the field.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

use super::{EPOCH_SENTINEL, ISO_MILLIS_FORMAT};

pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&date.format(ISO_MILLIS_FORMAT).to_string()),
        None => serializer.serialize_str(EPOCH_SENTINEL),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let date = DateTime::parse_from_rfc3339(&raw)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| de::Error::custom(format!("Invalid timestamp {raw:?}: {e:#}")))?;
    if date.timestamp() == 0 && date.timestamp_subsec_nanos() == 0 {
        Ok(None)
    } else {
        Ok(Some(date))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Serialize, Debug, PartialEq)]
    struct TestWrapper {
        #[serde(with = "super")]
        pub value: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_sentinel_deserializes_to_none() {
        let deserialized: TestWrapper =
            serde_json::from_str(r#"{"value":"1970-01-01T00:00:00.000Z"}"#).unwrap();
        assert_eq!(None, deserialized.value);
    }

    #[test]
    fn test_none_serializes_to_sentinel() {
        let serialized = serde_json::to_string(&TestWrapper { value: None }).unwrap();
        assert_eq!(r#"{"value":"1970-01-01T00:00:00.000Z"}"#, serialized);
    }

    #[test]
    fn test_real_timestamp_round_trips() {
        let raw = r#"{"value":"2017-03-06T11:08:12.000Z"}"#;
        let deserialized: TestWrapper = serde_json::from_str(raw).unwrap();
        assert!(deserialized.value.is_some());
        assert_eq!(raw, serde_json::to_string(&deserialized).unwrap());
    }
}
