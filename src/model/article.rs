use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::author::AuthorDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ArticleCategoryDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ArticleAuthorDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub avatar: Option<String>,
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ArticleTagDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
}

/// Table-of-contents entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ArticleSectionDto {
    pub id: String,
    pub title: String,
    pub level: u8,
}

/// Article as it appears in lists, without body content.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub image: String,
    pub category: Option<ArticleCategoryDto>,
    pub author: Option<ArticleAuthorDto>,
    pub tags: Vec<ArticleTagDto>,
    pub read_time: String,
    pub views: i64,
    pub is_featured: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Full article including body, sections and the author profile.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category: Option<ArticleCategoryDto>,
    pub author: Option<AuthorDto>,
    pub tags: Vec<ArticleTagDto>,
    pub read_time: String,
    pub views: i64,
    pub is_featured: bool,
    pub status: String,
    pub published_at: Option<DateTime<Utc>>,
    pub sections: Vec<ArticleSectionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
