//! Article domain models, listing parameters and the repository entity bundle.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PublicationStatus;
use sea_orm::ActiveEnum;
use serde::Deserialize;

use crate::{
    model::article::{ArticleDto, ArticleSectionDto, ArticleSummaryDto},
    server::{
        error::internal::InternalError,
        model::{author::Author, category::ArticleCategory, tag::Tag},
    },
};

/// Ordering applied to article listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSort {
    /// Most recently published first.
    Latest,
    /// Most viewed first, ties broken by most recently published.
    Popular,
    /// Same ordering as `Popular`.
    Trending,
    /// Earliest published first.
    Oldest,
}

impl ArticleSort {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "latest" => Some(Self::Latest),
            "popular" => Some(Self::Popular),
            "trending" => Some(Self::Trending),
            "oldest" => Some(Self::Oldest),
            _ => None,
        }
    }
}

/// Restrictions applied on top of the published-only rule.
///
/// All set fields must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFilter {
    pub category_id: Option<i32>,
    pub tag_id: Option<i32>,
    pub author_id: Option<i32>,
    pub featured: Option<bool>,
    /// Case-insensitive substring matched against title, excerpt and content.
    pub search: Option<String>,
}

/// Entity bundle returned by the article repository.
#[derive(Debug, Clone)]
pub struct ArticleWithRelations {
    pub article: entity::article::Model,
    pub category: Option<entity::category::Model>,
    pub author: Option<entity::author::Model>,
    pub tags: Vec<entity::tag::Model>,
}

/// Table-of-contents entry decoded from the article's `sections` column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArticleSection {
    pub id: String,
    pub title: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub category: Option<ArticleCategory>,
    pub author: Option<Author>,
    pub tags: Vec<Tag>,
    pub read_time: String,
    pub views: i64,
    pub is_featured: bool,
    pub status: PublicationStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub sections: Vec<ArticleSection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Converts an article entity bundle into a domain model.
    ///
    /// # Arguments
    /// - `result` - Article entity with its category, author and tags
    ///
    /// # Returns
    /// - `Ok(Article)` - Converted article
    /// - `Err(InternalError::InvalidStoredJson)` - The `sections` column is not a list of
    ///   `{id, title, level}` entries
    pub fn from_with_relations(result: ArticleWithRelations) -> Result<Self, InternalError> {
        let entity = result.article;

        let sections = if entity.sections.is_null() {
            Vec::new()
        } else {
            serde_json::from_value::<Vec<ArticleSection>>(entity.sections).map_err(|e| {
                InternalError::InvalidStoredJson {
                    table: "article",
                    column: "sections",
                    id: entity.id,
                    source: e,
                }
            })?
        };

        Ok(Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            excerpt: entity.excerpt,
            content: entity.content,
            image: entity.image,
            category: result.category.map(ArticleCategory::from_entity),
            author: result.author.map(Author::from_entity),
            tags: result.tags.into_iter().map(Tag::from_entity).collect(),
            read_time: entity.read_time,
            views: entity.views,
            is_featured: entity.is_featured,
            status: entity.status,
            published_at: entity.published_at,
            sections,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            image: self.image,
            category: self.category.map(ArticleCategory::into_dto),
            author: self.author.map(Author::into_dto),
            tags: self.tags.into_iter().map(Tag::into_article_tag_dto).collect(),
            read_time: self.read_time,
            views: self.views,
            is_featured: self.is_featured,
            status: self.status.to_value(),
            published_at: self.published_at,
            sections: self
                .sections
                .into_iter()
                .map(|s| ArticleSectionDto {
                    id: s.id,
                    title: s.title,
                    level: s.level,
                })
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Card form used by every listing; drops the body and sections.
    pub fn into_summary_dto(self) -> ArticleSummaryDto {
        ArticleSummaryDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            image: self.image,
            category: self.category.map(ArticleCategory::into_dto),
            author: self.author.map(Author::into_byline_dto),
            tags: self.tags.into_iter().map(Tag::into_article_tag_dto).collect(),
            read_time: self.read_time,
            views: self.views,
            is_featured: self.is_featured,
            published_at: self.published_at,
            created_at: self.created_at,
        }
    }
}

/// Slug-based listing filters as received from clients.
///
/// Slugs are resolved to IDs by the article service; an unknown slug matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleListParams {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub featured: Option<bool>,
}
