use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateElectricianRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateElectricianRequest {
    #[serde(deserialize_with = "crate::dto::deserialize_id")]
    pub id: i32,

    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
}
