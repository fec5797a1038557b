use sea_orm::DatabaseConnection;

use crate::server::{
    data::media::MediaRepository, error::AppError, model::media::Media,
    util::pagination::Paginated,
};

/// Page size used when the client gives none.
pub const DEFAULT_MEDIA_LIMIT: u64 = 20;
pub const MAX_MEDIA_LIMIT: u64 = 50;

pub struct MediaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of media, newest first, optionally restricted to one folder.
    pub async fn get_paginated(
        &self,
        folder: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<Paginated<Media>, AppError> {
        let (media, total) = MediaRepository::new(self.db)
            .get_paginated(folder, page, limit)
            .await?;

        Ok(Paginated::new(media, total, page, limit).map(Media::from_entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Media>, AppError> {
        let media = MediaRepository::new(self.db).find_by_id(id).await?;

        Ok(media.map(Media::from_entity))
    }

    pub async fn get_folders(&self) -> Result<Vec<String>, AppError> {
        Ok(MediaRepository::new(self.db).get_folders().await?)
    }
}
