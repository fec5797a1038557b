//! Media factory for creating test media records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{base_time, next_id};

/// Factory for creating test media records with customizable fields.
pub struct MediaFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::media::Model,
}

impl<'a> MediaFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = base_time();

        Self {
            db,
            entity: entity::media::Model {
                id: 0,
                filename: format!("image-{}.png", id),
                original_name: format!("Image {}.png", id),
                mime_type: "image/png".to_string(),
                size: 1024,
                url: format!("https://cdn.example.com/media/image-{}.png", id),
                alt: None,
                caption: None,
                width: Some(800),
                height: Some(600),
                folder: None,
                created_at: now,
                updated_at: now,
            },
        }
    }

    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.entity.folder = Some(folder.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self.entity.updated_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::media::Model, DbErr> {
        let e = self.entity;

        entity::media::ActiveModel {
            id: ActiveValue::NotSet,
            filename: ActiveValue::Set(e.filename),
            original_name: ActiveValue::Set(e.original_name),
            mime_type: ActiveValue::Set(e.mime_type),
            size: ActiveValue::Set(e.size),
            url: ActiveValue::Set(e.url),
            alt: ActiveValue::Set(e.alt),
            caption: ActiveValue::Set(e.caption),
            width: ActiveValue::Set(e.width),
            height: ActiveValue::Set(e.height),
            folder: ActiveValue::Set(e.folder),
            created_at: ActiveValue::Set(e.created_at),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a media record with default values.
pub async fn create_media(db: &DatabaseConnection) -> Result<entity::media::Model, DbErr> {
    MediaFactory::new(db).build().await
}
