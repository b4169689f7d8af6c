//! Lenient decoding for criteria coming from form controls
//!
//! Form inputs send `""` for an untouched select and numbers as strings;
//! both must decode to "unset" / a number instead of failing.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null`, missing, `""` and whitespace-only strings decode to `None`
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            match serde_json::from_value::<T>(Value::String(trimmed.to_string())) {
                Ok(parsed) => Ok(Some(parsed)),
                // Numeric fields typed into text inputs
                Err(err) => trimmed
                    .parse::<serde_json::Number>()
                    .ok()
                    .and_then(|n| serde_json::from_value::<T>(Value::Number(n)).ok())
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(err)),
            }
        }
        Some(other) => serde_json::from_value::<T>(other)
            .map(Some)
            .map_err(D::Error::custom),
    }
}

/// `null` and missing decode to `false`; `"true"`/`"false"` strings are accepted
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(b),
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "" | "false" => Ok(false),
            "true" => Ok(true),
            other => Err(D::Error::custom(format!("invalid boolean: {}", other))),
        },
        Some(other) => Err(D::Error::custom(format!("invalid boolean: {}", other))),
    }
}
