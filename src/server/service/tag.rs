use sea_orm::DatabaseConnection;

use crate::server::{
    data::tag::TagRepository,
    error::AppError,
    middleware::validation::PaginationQuery,
    model::{
        article::{Article, ArticleFilter},
        tag::Tag,
    },
    service::article::ArticleService,
    util::pagination::Paginated,
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Tag>, AppError> {
        let tags = TagRepository::new(self.db).get_all().await?;

        Ok(tags.into_iter().map(Tag::from_entity).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Tag>, AppError> {
        let tag = TagRepository::new(self.db).find_by_slug(slug).await?;

        Ok(tag.map(Tag::from_entity))
    }

    /// Gets a page of published articles carrying the tag; empty for unknown tags.
    pub async fn get_articles(
        &self,
        slug: &str,
        pagination: PaginationQuery,
    ) -> Result<Paginated<Article>, AppError> {
        let Some(tag) = TagRepository::new(self.db).find_by_slug(slug).await? else {
            return Ok(Paginated::empty(pagination.page, pagination.limit));
        };

        let filter = ArticleFilter {
            tag_id: Some(tag.id),
            ..Default::default()
        };

        ArticleService::new(self.db)
            .get_filtered(&filter, pagination)
            .await
    }
}
