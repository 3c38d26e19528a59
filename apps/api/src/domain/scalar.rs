//! Lenient text fields
//!
//! Stored fields are text, but clients may send any JSON value. Scalars
//! keep their textual form (`5` becomes `"5"`), composite values are kept
//! as their JSON text, and `null` counts as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
