pub mod client_dto;
pub mod electrician_dto;
pub mod intervention_dto;
pub mod invoice_dto;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Delete requests carry the target id in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i32,
}

/// Confirmation body returned by delete handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

fn coerce_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Forms submit identifier fields as strings; accept JSON numbers or
/// numeric strings and coerce to i32.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    coerce_id(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid identifier: {}", value)))
}

pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => coerce_id(&v)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid identifier: {}", v))),
    }
}
