use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    middleware::validation::PaginationQuery,
    model::{
        article::{Article, ArticleFilter},
        category::Category,
    },
    service::article::ArticleService,
    util::pagination::Paginated,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category with its published article count, in display order.
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db).get_all().await?;

        Ok(categories
            .into_iter()
            .map(Category::from_with_count)
            .collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError> {
        let result = CategoryRepository::new(self.db).find_by_slug(slug).await?;

        Ok(result.map(Category::from_with_count))
    }

    /// Gets a category together with one page of its published articles.
    ///
    /// # Returns
    /// - `Ok(Some((category, articles)))` - Category found
    /// - `Ok(None)` - No category with this slug
    /// - `Err(AppError)` - Database or conversion error
    pub async fn get_articles(
        &self,
        slug: &str,
        pagination: PaginationQuery,
    ) -> Result<Option<(Category, Paginated<Article>)>, AppError> {
        let Some(category) = self.get_by_slug(slug).await? else {
            return Ok(None);
        };

        let filter = ArticleFilter {
            category_id: Some(category.id),
            ..Default::default()
        };
        let articles = ArticleService::new(self.db)
            .get_filtered(&filter, pagination)
            .await?;

        Ok(Some((category, articles)))
    }
}
