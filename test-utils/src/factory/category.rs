//! Category factory for creating test category entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{base_time, next_id};

/// Factory for creating test categories with customizable fields.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::category::Model,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with a unique name and slug.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = base_time();

        Self {
            db,
            entity: entity::category::Model {
                id: 0,
                name: format!("Category {}", id),
                slug: format!("category-{}", id),
                description: "Articles about a topic".to_string(),
                icon: Some("book".to_string()),
                color: Some("#3b82f6".to_string()),
                gradient: None,
                accent_class: None,
                sort_order: 0,
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

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.entity.sort_order = sort_order;
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        let e = self.entity;

        entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(e.name),
            slug: ActiveValue::Set(e.slug),
            description: ActiveValue::Set(e.description),
            icon: ActiveValue::Set(e.icon),
            color: ActiveValue::Set(e.color),
            gradient: ActiveValue::Set(e.gradient),
            accent_class: ActiveValue::Set(e.accent_class),
            sort_order: ActiveValue::Set(e.sort_order),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
