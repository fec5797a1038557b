use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::util::pagination::{page_in_range, page_index};

pub struct MediaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of media, newest first, optionally restricted to a folder.
    ///
    /// # Arguments
    /// - `folder` - Exact folder name to filter on
    /// - `page` - 1-based page number
    /// - `limit` - Page size
    ///
    /// # Returns
    /// - `Ok((media, total))` - The requested page and the total number of matches
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        folder: Option<&str>,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<entity::media::Model>, u64), DbErr> {
        let mut query = entity::prelude::Media::find();
        if let Some(folder) = folder {
            query = query.filter(entity::media::Column::Folder.eq(folder));
        }

        let paginator = query
            .order_by_desc(entity::media::Column::CreatedAt)
            .order_by_desc(entity::media::Column::Id)
            .paginate(self.db, limit);

        let total = paginator.num_items().await?;
        let media = if page_in_range(page, limit, total) {
            paginator.fetch_page(page_index(page)).await?
        } else {
            Vec::new()
        };

        Ok((media, total))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::media::Model>, DbErr> {
        entity::prelude::Media::find_by_id(id).one(self.db).await
    }

    /// Gets the distinct, non-null folder names in alphabetical order.
    pub async fn get_folders(&self) -> Result<Vec<String>, DbErr> {
        let folders = entity::prelude::Media::find()
            .select_only()
            .column(entity::media::Column::Folder)
            .distinct()
            .filter(entity::media::Column::Folder.is_not_null())
            .order_by_asc(entity::media::Column::Folder)
            .into_tuple::<Option<String>>()
            .all(self.db)
            .await?;

        Ok(folders.into_iter().flatten().collect())
    }
}
