use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{
    de::{self, Visitor},
    Deserializer,
};

struct FloatVisitor;

impl FloatVisitor {
    fn format_error<E, E2: Error>(e: E2) -> E
    where
        E: de::Error,
    {
        de::Error::custom(format!("Invalid numeric value: {e:#}"))
    }
}

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("number or string containing a number")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        f64::from_str(s.trim()).map_err(FloatVisitor::format_error)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v as f64)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v as f64)
    }
}

/// Backend feeds emit amounts either as JSON numbers or as numeric strings
/// (`"18.38"`), depending on the source system.
pub fn from_float_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(FloatVisitor)
}
