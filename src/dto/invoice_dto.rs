use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    #[validate(range(min = 0.0))]
    pub amount: f64,

    /// ISO-8601 timestamp or bare YYYY-MM-DD calendar day.
    pub issue_date: String,

    pub due_date: String,

    /// Defaults to "Brouillon" when omitted.
    pub status: Option<String>,

    #[serde(deserialize_with = "crate::dto::deserialize_id")]
    pub intervention_id: i32,
}

/// Partial update: fields left out keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceRequest {
    #[serde(deserialize_with = "crate::dto::deserialize_id")]
    pub id: i32,

    #[validate(range(min = 0.0))]
    pub amount: Option<f64>,

    pub issue_date: Option<String>,

    pub due_date: Option<String>,

    pub status: Option<String>,

    #[serde(default, deserialize_with = "crate::dto::deserialize_optional_id")]
    pub intervention_id: Option<i32>,
}
