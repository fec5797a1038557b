use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::article::ArticleSummaryDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub gradient: Option<String>,
    pub accent_class: Option<String>,
    pub order: i32,
    /// Number of published articles filed under this category.
    pub article_count: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CategoryArticlesDto {
    pub category: CategoryDto,
    pub articles: Vec<ArticleSummaryDto>,
}
