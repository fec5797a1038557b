use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}
