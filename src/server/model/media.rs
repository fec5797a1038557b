use chrono::{DateTime, Utc};

use crate::model::media::MediaDto;

/// An uploaded asset and where it is served from.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub id: i32,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub folder: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Media {
    pub fn from_entity(entity: entity::media::Model) -> Self {
        Self {
            id: entity.id,
            filename: entity.filename,
            original_name: entity.original_name,
            mime_type: entity.mime_type,
            size: entity.size,
            url: entity.url,
            alt: entity.alt,
            caption: entity.caption,
            width: entity.width,
            height: entity.height,
            folder: entity.folder,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MediaDto {
        MediaDto {
            id: self.id,
            filename: self.filename,
            original_name: self.original_name,
            mime_type: self.mime_type,
            size: self.size,
            url: self.url,
            alt: self.alt,
            caption: self.caption,
            width: self.width,
            height: self.height,
            folder: self.folder,
            created_at: self.created_at,
        }
    }
}
