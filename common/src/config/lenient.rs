use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Field deserializer that replaces a value of the wrong shape with `T::default()`.
///
/// Use with `#[serde(default, deserialize_with = "default_on_invalid")]` so one bad entry
/// in a stored document does not discard the rest of it. The document itself must still
/// be valid YAML.
pub fn default_on_invalid<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_yaml_ng::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
