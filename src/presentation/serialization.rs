use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a field that upstream documents as a string but that may arrive as a
/// number or as `null`.
///
/// Strings pass through untouched, numbers and booleans become their JSON text and
/// `null` becomes the empty string. Arrays and objects are rejected.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or a number, found {other}"
        ))),
    }
}

/// Deserializes a field whose `null` means the same as an absent field.
///
/// Pairs with `#[serde(default)]`, which only covers the missing-key case.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
