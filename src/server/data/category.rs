use entity::sea_orm_active_enums::PublicationStatus;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::category::CategoryWithCount;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category ordered by display order then name, with published article counts.
    pub async fn get_all(&self) -> Result<Vec<CategoryWithCount>, DbErr> {
        let categories = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::SortOrder)
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        let mut results = Vec::with_capacity(categories.len());
        for category in categories {
            let article_count = self.count_published_articles(category.id).await?;
            results.push(CategoryWithCount {
                category,
                article_count,
            });
        }

        Ok(results)
    }

    /// Finds a category by slug with its published article count.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<CategoryWithCount>, DbErr> {
        let Some(category) = entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let article_count = self.count_published_articles(category.id).await?;

        Ok(Some(CategoryWithCount {
            category,
            article_count,
        }))
    }

    async fn count_published_articles(&self, category_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Article::find()
            .filter(entity::article::Column::CategoryId.eq(category_id))
            .filter(entity::article::Column::Status.eq(PublicationStatus::Published))
            .count(self.db)
            .await
    }
}
