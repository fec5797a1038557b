use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaDto {
    pub id: i32,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    /// Size in bytes.
    pub size: i64,
    pub url: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub folder: Option<String>,
    pub created_at: DateTime<Utc>,
}
