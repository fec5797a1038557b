//! Page and page group factories.

use entity::sea_orm_active_enums::PublicationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{base_time, next_id};

/// Factory for creating test page groups.
pub struct PageGroupFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::page_group::Model,
}

impl<'a> PageGroupFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = base_time();

        Self {
            db,
            entity: entity::page_group::Model {
                id: 0,
                slug: format!("group-{}", id),
                name: format!("Group {}", id),
                description: None,
                sort_order: 0,
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.entity.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::page_group::Model, DbErr> {
        let e = self.entity;

        entity::page_group::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(e.slug),
            name: ActiveValue::Set(e.name),
            description: ActiveValue::Set(e.description),
            sort_order: ActiveValue::Set(e.sort_order),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating test pages.
///
/// Pages default to `published` with a single paragraph block and empty SEO fields.
pub struct PageFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::page::Model,
}

impl<'a> PageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = base_time();

        Self {
            db,
            entity: entity::page::Model {
                id: 0,
                slug: format!("page-{}", id),
                title: format!("Page {}", id),
                description: None,
                content: serde_json::json!([
                    { "type": "paragraph", "data": { "text": "Hello" } }
                ]),
                group_id: None,
                status: PublicationStatus::Published,
                sort_order: 0,
                seo: serde_json::json!({}),
                published_at: Some(now),
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    pub fn group(mut self, group_id: i32) -> Self {
        self.entity.group_id = Some(group_id);
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.entity.sort_order = sort_order;
        self
    }

    /// Sets the raw content block JSON.
    pub fn content(mut self, content: serde_json::Value) -> Self {
        self.entity.content = content;
        self
    }

    /// Sets the raw SEO JSON.
    pub fn seo(mut self, seo: serde_json::Value) -> Self {
        self.entity.seo = seo;
        self
    }

    pub fn draft(mut self) -> Self {
        self.entity.status = PublicationStatus::Draft;
        self.entity.published_at = None;
        self
    }

    pub async fn build(self) -> Result<entity::page::Model, DbErr> {
        let e = self.entity;

        entity::page::ActiveModel {
            id: ActiveValue::NotSet,
            slug: ActiveValue::Set(e.slug),
            title: ActiveValue::Set(e.title),
            description: ActiveValue::Set(e.description),
            content: ActiveValue::Set(e.content),
            group_id: ActiveValue::Set(e.group_id),
            status: ActiveValue::Set(e.status),
            sort_order: ActiveValue::Set(e.sort_order),
            seo: ActiveValue::Set(e.seo),
            published_at: ActiveValue::Set(e.published_at),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a page group with default values.
pub async fn create_page_group(
    db: &DatabaseConnection,
) -> Result<entity::page_group::Model, DbErr> {
    PageGroupFactory::new(db).build().await
}

/// Creates a published page with default values.
pub async fn create_page(db: &DatabaseConnection) -> Result<entity::page::Model, DbErr> {
    PageFactory::new(db).build().await
}
