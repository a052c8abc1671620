//! Lenient scalar handling shared by the schema and the version probe

use std::collections::BTreeMap;

use serde::de::{self, Deserialize, Deserializer};
use serde_yaml::Value;

/// Render a YAML scalar as the string it was written as.
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `null` or a missing key become `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An optional scalar read as a string, so `version: 0` and
/// `version: "0"` mean the same thing.
pub(crate) fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_to_string(&value)
            .map(Some)
            .ok_or_else(|| de::Error::custom("expected a scalar value")),
    }
}

/// A mapping whose values may be any scalar, stored as strings.
pub(crate) fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Value> = null_as_default(deserializer)?;
    raw.into_iter()
        .map(|(key, value)| {
            scalar_to_string(&value)
                .map(|v| (key.clone(), v))
                .ok_or_else(|| de::Error::custom(format!("value of {key} must be a scalar")))
        })
        .collect()
}
