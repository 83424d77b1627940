use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer};

/// Reads an optional form field, treating a missing or whitespace-only value
/// as `None` and parsing anything else with `FromStr`. Non-blank values are
/// parsed as submitted, surrounding whitespace included.
///
/// Pair it with `#[serde(default)]` so an absent field also decodes.
pub fn blank_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw {
        Some(s) if !s.trim().is_empty() => {
            FromStr::from_str(&s).map_err(de::Error::custom).map(Some)
        }
        _ => Ok(None),
    }
}
