use sea_orm::DatabaseConnection;

use crate::server::{
    data::author::AuthorRepository,
    error::AppError,
    middleware::validation::PaginationQuery,
    model::{
        article::{Article, ArticleFilter},
        author::Author,
    },
    service::article::ArticleService,
    util::pagination::Paginated,
};

pub struct AuthorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Author>, AppError> {
        let authors = AuthorRepository::new(self.db).get_all().await?;

        Ok(authors.into_iter().map(Author::from_entity).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Author>, AppError> {
        let author = AuthorRepository::new(self.db).find_by_slug(slug).await?;

        Ok(author.map(Author::from_entity))
    }

    /// Gets a page of the author's published articles; empty for unknown authors.
    pub async fn get_articles(
        &self,
        slug: &str,
        pagination: PaginationQuery,
    ) -> Result<Paginated<Article>, AppError> {
        let Some(author) = AuthorRepository::new(self.db).find_by_slug(slug).await? else {
            return Ok(Paginated::empty(pagination.page, pagination.limit));
        };

        let filter = ArticleFilter {
            author_id: Some(author.id),
            ..Default::default()
        };

        ArticleService::new(self.db)
            .get_filtered(&filter, pagination)
            .await
    }
}
