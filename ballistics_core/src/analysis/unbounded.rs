//! Serde for metrics that are infinite when nothing dies
//!
//! serde_json writes non-finite floats as `null` and rejects `null` for an
//! `f64`. Finite values stay plain numbers; infinities and NaN are written as
//! `"inf"`, `"-inf"` and `"nan"`. A `null` reads back as infinity.
//!
//! Use with `#[serde(with = "super::unbounded")]`.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("nan")
    } else if value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Repr>::deserialize(deserializer)? {
        Some(Repr::Number(value)) => Ok(value),
        Some(Repr::Text(text)) => match text.as_str() {
            "inf" | "infinity" => Ok(f64::INFINITY),
            "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
            "nan" => Ok(f64::NAN),
            other => Err(serde::de::Error::custom(format!(
                "expected a number or \"inf\", got {other:?}"
            ))),
        },
        None => Ok(f64::INFINITY),
    }
}
