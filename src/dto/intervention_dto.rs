use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterventionRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub description: Option<String>,

    /// ISO-8601 timestamp or bare YYYY-MM-DD calendar day.
    pub date: String,

    /// Defaults to "Planifiée" when omitted.
    pub status: Option<String>,

    #[serde(deserialize_with = "crate::dto::deserialize_id")]
    pub client_id: i32,

    #[serde(deserialize_with = "crate::dto::deserialize_id")]
    pub electrician_id: i32,
}

/// Partial update: fields left out keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterventionRequest {
    #[serde(deserialize_with = "crate::dto::deserialize_id")]
    pub id: i32,

    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub date: Option<String>,

    pub status: Option<String>,

    #[serde(default, deserialize_with = "crate::dto::deserialize_optional_id")]
    pub client_id: Option<i32>,

    #[serde(default, deserialize_with = "crate::dto::deserialize_optional_id")]
    pub electrician_id: Option<i32>,
}
