use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every comment on an article, newest first.
    ///
    /// Comments created at the same instant fall back to descending ID so the fetch order
    /// is stable between requests.
    ///
    /// # Arguments
    /// - `article_id` - Article whose comments to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All comments for the article, empty for unknown articles
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_article_id(
        &self,
        article_id: i32,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts every comment on an article, replies included.
    pub async fn count_by_article_id(&self, article_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .count(self.db)
            .await
    }
}
