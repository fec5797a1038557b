use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, category::CategoryRepository, tag::TagRepository},
    error::AppError,
    middleware::validation::PaginationQuery,
    model::article::{Article, ArticleFilter, ArticleListParams, ArticleSort, ArticleWithRelations},
    util::pagination::Paginated,
};

/// Minimum trimmed length of a search term; shorter terms return an empty page.
pub const MIN_SEARCH_LENGTH: usize = 2;

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of published articles filtered by category slug, tag slug and featured
    /// flag.
    ///
    /// An unknown category or tag slug yields an empty page instead of an error.
    pub async fn get_paginated(
        &self,
        params: ArticleListParams,
        pagination: PaginationQuery,
    ) -> Result<Paginated<Article>, AppError> {
        let mut filter = ArticleFilter {
            featured: params.featured,
            ..Default::default()
        };

        if let Some(slug) = params.category.as_deref() {
            match CategoryRepository::new(self.db).find_by_slug(slug).await? {
                Some(result) => filter.category_id = Some(result.category.id),
                None => return Ok(Paginated::empty(pagination.page, pagination.limit)),
            }
        }

        if let Some(slug) = params.tag.as_deref() {
            match TagRepository::new(self.db).find_by_slug(slug).await? {
                Some(tag) => filter.tag_id = Some(tag.id),
                None => return Ok(Paginated::empty(pagination.page, pagination.limit)),
            }
        }

        self.get_filtered(&filter, pagination).await
    }

    /// Gets a page of published articles matching an already-resolved filter.
    pub async fn get_filtered(
        &self,
        filter: &ArticleFilter,
        pagination: PaginationQuery,
    ) -> Result<Paginated<Article>, AppError> {
        let (articles, total) = ArticleRepository::new(self.db)
            .get_paginated(filter, pagination.sort, pagination.page, pagination.limit)
            .await?;

        Ok(Paginated::new(
            convert(articles)?,
            total,
            pagination.page,
            pagination.limit,
        ))
    }

    /// Gets the most viewed published articles.
    pub async fn get_trending(&self, limit: u64) -> Result<Vec<Article>, AppError> {
        let articles = ArticleRepository::new(self.db)
            .get_top(&ArticleFilter::default(), ArticleSort::Trending, limit)
            .await?;

        convert(articles)
    }

    /// Gets the most recently published featured articles.
    pub async fn get_featured(&self, limit: u64) -> Result<Vec<Article>, AppError> {
        let filter = ArticleFilter {
            featured: Some(true),
            ..Default::default()
        };

        let articles = ArticleRepository::new(self.db)
            .get_top(&filter, ArticleSort::Latest, limit)
            .await?;

        convert(articles)
    }

    /// Searches published articles by case-insensitive substring over title, excerpt and
    /// content, most viewed first.
    ///
    /// # Arguments
    /// - `term` - Raw search text; surrounding whitespace is ignored
    /// - `page` - 1-based page number
    /// - `limit` - Page size
    ///
    /// # Returns
    /// - `Ok(Paginated<Article>)` - Matches; an empty first page when the trimmed term is
    ///   shorter than two characters
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(
        &self,
        term: &str,
        page: u64,
        limit: u64,
    ) -> Result<Paginated<Article>, AppError> {
        let term = term.trim();
        if term.chars().count() < MIN_SEARCH_LENGTH {
            return Ok(Paginated::empty(1, limit));
        }

        let filter = ArticleFilter {
            search: Some(term.to_string()),
            ..Default::default()
        };

        self.get_filtered(
            &filter,
            PaginationQuery {
                page,
                limit,
                sort: ArticleSort::Popular,
            },
        )
        .await
    }

    /// Gets a published article by slug with author bio and social links.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Article>, AppError> {
        let result = ArticleRepository::new(self.db).get_by_slug(slug).await?;

        result
            .map(Article::from_with_relations)
            .transpose()
            .map_err(Into::into)
    }

    /// Gets articles related to the given one by category or shared tags.
    ///
    /// Returns an empty list when the slug does not name a published article.
    pub async fn get_related(&self, slug: &str, limit: u64) -> Result<Vec<Article>, AppError> {
        let repo = ArticleRepository::new(self.db);

        let Some(article) = repo.find_by_slug(slug).await? else {
            return Ok(Vec::new());
        };

        convert(repo.get_related(&article, limit).await?)
    }
}

fn convert(results: Vec<ArticleWithRelations>) -> Result<Vec<Article>, AppError> {
    results
        .into_iter()
        .map(Article::from_with_relations)
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}
