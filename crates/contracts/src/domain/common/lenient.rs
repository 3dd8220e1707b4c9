//! Tolerant deserializers for backend payloads.
//!
//! The backend serialises SQL decimals as strings (`"12.50"`), flags as
//! numbers or booleans, and leaves optional text columns `null`. These
//! helpers accept every shape seen on the wire.

use serde::de::{Deserializer, Error};
use serde::Deserialize;

use crate::shared::metadata::whole_i64;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    fn to_f64(&self) -> Result<f64, String> {
        match self {
            Scalar::Int(v) => Ok(*v as f64),
            Scalar::Float(v) => Ok(*v),
            Scalar::Bool(v) => Ok(if *v { 1.0 } else { 0.0 }),
            Scalar::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("expected a number, got '{}'", s)),
        }
    }
}

pub fn f64_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    match raw {
        None => Ok(0.0),
        Some(v) => v.to_f64().map_err(D::Error::custom),
    }
}

pub fn i64_from_any<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64_from_any(deserializer)?;
    whole_i64(value)
        .ok_or_else(|| D::Error::custom(format!("expected an integer, got {}", value)))
}

/// `null` → empty string.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null`, `""` and whitespace → `None`.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "f64_from_any")]
        price: f64,
        #[serde(deserialize_with = "i64_from_any")]
        stock: i64,
        #[serde(default, deserialize_with = "blank_as_none")]
        image: Option<String>,
        #[serde(default, deserialize_with = "string_or_empty")]
        note: String,
    }

    #[test]
    fn test_numbers_from_strings_and_numbers() {
        let s: Sample =
            serde_json::from_str(r#"{"price":"12.50","stock":"7","image":"","note":null}"#)
                .unwrap();
        assert_eq!(s.price, 12.5);
        assert_eq!(s.stock, 7);
        assert_eq!(s.image, None);
        assert_eq!(s.note, "");

        let s: Sample =
            serde_json::from_str(r#"{"price":3,"stock":10.0,"image":"a.png","note":"x"}"#)
                .unwrap();
        assert_eq!(s.price, 3.0);
        assert_eq!(s.stock, 10);
        assert_eq!(s.image.as_deref(), Some("a.png"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Sample>(r#"{"price":"abc","stock":1}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"price":1,"stock":1.5}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"price":1,"stock":"1e30"}"#).is_err());
    }
}
