//! Comment factory for creating test comment entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{base_time, next_id};

/// Factory for creating test comments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let root = CommentFactory::new(&db, article.id).build().await?;
/// let reply = CommentFactory::new(&db, article.id)
///     .parent(root.id)
///     .created_at(minutes_after(5))
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::comment::Model,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new root CommentFactory for the given article.
    pub fn new(db: &'a DatabaseConnection, article_id: i32) -> Self {
        let id = next_id();
        let now = base_time();

        Self {
            db,
            entity: entity::comment::Model {
                id: 0,
                article_id,
                parent_id: None,
                author: format!("Reader {}", id),
                avatar: format!("https://cdn.example.com/readers/{}.png", id),
                content: format!("Comment number {}", id),
                likes: 0,
                created_at: now,
                updated_at: now,
            },
        }
    }

    /// Makes the comment a reply to the given parent comment ID.
    pub fn parent(mut self, parent_id: i32) -> Self {
        self.entity.parent_id = Some(parent_id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.entity.content = content.into();
        self
    }

    pub fn likes(mut self, likes: i32) -> Self {
        self.entity.likes = likes;
        self
    }

    /// Sets both `created_at` and `updated_at`.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self.entity.updated_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let e = self.entity;

        entity::comment::ActiveModel {
            id: ActiveValue::NotSet,
            article_id: ActiveValue::Set(e.article_id),
            parent_id: ActiveValue::Set(e.parent_id),
            author: ActiveValue::Set(e.author),
            avatar: ActiveValue::Set(e.avatar),
            content: ActiveValue::Set(e.content),
            likes: ActiveValue::Set(e.likes),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a root comment with default values.
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id).build().await
}
