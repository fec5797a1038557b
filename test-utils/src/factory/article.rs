//! Article factory for creating test article entities.
//!
//! Articles default to `published` with `published_at` set to the shared base time, so
//! they are visible to every read query unless a test overrides the status.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::PublicationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{base_time, next_id};

/// Factory for creating test articles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let article = ArticleFactory::new(&db, category.id, author.id)
///     .title("Understanding lifetimes")
///     .views(250)
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::article::Model,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory for the given category and author.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Category the article is filed under
    /// - `author_id` - Author of the article
    pub fn new(db: &'a DatabaseConnection, category_id: i32, author_id: i32) -> Self {
        let id = next_id();
        let now = base_time();

        Self {
            db,
            entity: entity::article::Model {
                id: 0,
                title: format!("Article {}", id),
                slug: format!("article-{}", id),
                excerpt: "A short summary of the article".to_string(),
                content: "<p>Article body</p>".to_string(),
                image: format!("https://cdn.example.com/articles/{}.jpg", id),
                category_id,
                author_id,
                read_time: "5 min read".to_string(),
                views: 0,
                is_featured: false,
                status: PublicationStatus::Published,
                published_at: Some(now),
                sections: serde_json::json!([]),
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.entity.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.entity.content = content.into();
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.entity.views = views;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.entity.is_featured = featured;
        self
    }

    /// Marks the article as a draft, hiding it from every read query.
    pub fn draft(mut self) -> Self {
        self.entity.status = PublicationStatus::Draft;
        self.entity.published_at = None;
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.entity.published_at = Some(published_at);
        self
    }

    /// Sets the raw table-of-contents JSON.
    pub fn sections(mut self, sections: serde_json::Value) -> Self {
        self.entity.sections = sections;
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        let e = self.entity;

        entity::article::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(e.title),
            slug: ActiveValue::Set(e.slug),
            excerpt: ActiveValue::Set(e.excerpt),
            content: ActiveValue::Set(e.content),
            image: ActiveValue::Set(e.image),
            category_id: ActiveValue::Set(e.category_id),
            author_id: ActiveValue::Set(e.author_id),
            read_time: ActiveValue::Set(e.read_time),
            views: ActiveValue::Set(e.views),
            is_featured: ActiveValue::Set(e.is_featured),
            status: ActiveValue::Set(e.status),
            published_at: ActiveValue::Set(e.published_at),
            sections: ActiveValue::Set(e.sections),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published article with default values.
pub async fn create_article(
    db: &DatabaseConnection,
    category_id: i32,
    author_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, category_id, author_id).build().await
}

/// Links an existing article to an existing tag.
pub async fn attach_tag(
    db: &DatabaseConnection,
    article_id: i32,
    tag_id: i32,
) -> Result<entity::article_tag::Model, DbErr> {
    entity::article_tag::ActiveModel {
        article_id: ActiveValue::Set(article_id),
        tag_id: ActiveValue::Set(tag_id),
    }
    .insert(db)
    .await
}
