//! Author factory for creating test author entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{base_time, next_id};

/// Factory for creating test authors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let author = AuthorFactory::new(&db)
///     .name("Ada Lovelace")
///     .slug("ada-lovelace")
///     .build()
///     .await?;
/// ```
pub struct AuthorFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::author::Model,
}

impl<'a> AuthorFactory<'a> {
    /// Creates a new AuthorFactory with a unique name and slug.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = base_time();

        Self {
            db,
            entity: entity::author::Model {
                id: 0,
                name: format!("Author {}", id),
                slug: format!("author-{}", id),
                email: Some(format!("author{}@example.com", id)),
                avatar: Some(format!("https://cdn.example.com/avatars/{}.png", id)),
                role: "Staff Writer".to_string(),
                bio: None,
                twitter: None,
                linkedin: None,
                github: None,
                website: None,
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

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.entity.bio = Some(bio.into());
        self
    }

    pub fn github(mut self, github: impl Into<String>) -> Self {
        self.entity.github = Some(github.into());
        self
    }

    /// Builds and inserts the author entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::author::Model)` - Created author entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::author::Model, DbErr> {
        let e = self.entity;

        entity::author::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(e.name),
            slug: ActiveValue::Set(e.slug),
            email: ActiveValue::Set(e.email),
            avatar: ActiveValue::Set(e.avatar),
            role: ActiveValue::Set(e.role),
            bio: ActiveValue::Set(e.bio),
            twitter: ActiveValue::Set(e.twitter),
            linkedin: ActiveValue::Set(e.linkedin),
            github: ActiveValue::Set(e.github),
            website: ActiveValue::Set(e.website),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an author with default values.
pub async fn create_author(db: &DatabaseConnection) -> Result<entity::author::Model, DbErr> {
    AuthorFactory::new(db).build().await
}
