//! Tag factory for creating test tag entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{base_time, next_id};

/// Factory for creating test tags with customizable fields.
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::tag::Model,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with a unique name and slug.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = base_time();

        Self {
            db,
            entity: entity::tag::Model {
                id: 0,
                slug: format!("tag-{}", id),
                name: format!("Tag {}", id),
                description: None,
                color: Some("#10b981".to_string()),
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    /// Builds and inserts the tag entity into the database.
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        let e = self.entity;

        entity::tag::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(e.slug),
            name: ActiveValue::Set(e.name),
            description: ActiveValue::Set(e.description),
            color: ActiveValue::Set(e.color),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}
