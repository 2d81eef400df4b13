//! Serde `with` module for string-domain fields where the wire uses the
//! empty string for "unset". Some source systems fill every column of an
//! approver row even when the step has no assignee yet.

use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        Ok(None)
    } else {
        T::deserialize(raw.into_deserializer()).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Serialize, Debug, PartialEq)]
    enum Label {
        #[serde(rename = "ON")]
        On,
        #[serde(rename = "OFF")]
        Off,
    }

    #[derive(Deserialize, Serialize, Debug, PartialEq)]
    struct TestWrapper {
        #[serde(with = "super")]
        pub value: Option<Label>,
    }

    #[test]
    fn test_deserialize_empty_string() {
        let deserialized: TestWrapper = serde_json::from_str(r#"{"value": ""}"#).unwrap();
        assert_eq!(None, deserialized.value);
    }

    #[test]
    fn test_deserialize_known_variant() {
        let deserialized: TestWrapper = serde_json::from_str(r#"{"value": "ON"}"#).unwrap();
        assert_eq!(Some(Label::On), deserialized.value);
    }

    #[test]
    fn test_deserialize_unknown_variant_fails() {
        let result: Result<TestWrapper, _> = serde_json::from_str(r#"{"value": "MAYBE"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_none_as_empty_string() {
        let serialized = serde_json::to_string(&TestWrapper { value: None }).unwrap();
        assert_eq!(r#"{"value":""}"#, serialized);
    }

    #[test]
    fn test_serialize_some() {
        let serialized = serde_json::to_string(&TestWrapper {
            value: Some(Label::Off),
        })
        .unwrap();
        assert_eq!(r#"{"value":"OFF"}"#, serialized);
    }
}
