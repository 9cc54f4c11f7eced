use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub address: Option<String>,

    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}

/// Partial update: fields left out keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    #[serde(deserialize_with = "crate::dto::deserialize_id")]
    pub id: i32,

    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub address: Option<String>,

    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,
}
