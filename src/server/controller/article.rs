use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        article::{ArticleDto, ArticleSummaryDto},
    },
    server::{
        error::AppError,
        middleware::validation::{
            bounded_limit, lenient_page, PaginationQuery, ValidSlug, DEFAULT_PAGE_LIMIT,
            MAX_PAGE_LIMIT,
        },
        model::article::{Article, ArticleListParams},
        service::article::ArticleService,
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

const DEFAULT_HIGHLIGHT_LIMIT: u64 = 5;
const MAX_HIGHLIGHT_LIMIT: u64 = 20;
const DEFAULT_RELATED_LIMIT: u64 = 3;
const MAX_RELATED_LIMIT: u64 = 10;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListFilters {
    /// Category slug
    pub category: Option<String>,
    /// Tag slug
    pub tag: Option<String>,
    /// `true` or `false`
    pub featured: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitParams {
    pub limit: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search text, at least two characters after trimming
    pub q: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

fn parse_featured(raw: Option<&str>) -> Result<Option<bool>, AppError> {
    match raw.filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(_) => Err(AppError::BadRequest(
            "Invalid query parameters: featured: Expected 'true' | 'false'".to_string(),
        )),
    }
}

fn summaries(articles: Vec<Article>) -> Vec<ArticleSummaryDto> {
    articles
        .into_iter()
        .map(Article::into_summary_dto)
        .collect()
}

/// List published articles.
///
/// Filters by category slug, tag slug and featured flag. An unknown category or tag
/// returns an empty page.
///
/// # Returns
/// - `200 OK` - Page of article summaries with pagination meta
/// - `400 Bad Request` - Malformed page, limit, sort or featured value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 50"),
        ("sort" = Option<String>, Query, description = "latest | popular | trending | oldest"),
        ArticleListFilters
    ),
    responses(
        (status = 200, description = "Page of articles", body = ApiResponse<Vec<ArticleSummaryDto>>),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    pagination: PaginationQuery,
    Query(filters): Query<ArticleListFilters>,
) -> Result<impl IntoResponse, AppError> {
    let params = ArticleListParams {
        featured: parse_featured(filters.featured.as_deref())?,
        category: filters.category.filter(|v| !v.is_empty()),
        tag: filters.tag.filter(|v| !v.is_empty()),
    };

    let page = ArticleService::new(&state.db)
        .get_paginated(params, pagination)
        .await?;
    let meta = page.meta();

    Ok((StatusCode::OK, Json(ApiResponse::paginated(summaries(page.items), meta))))
}

/// List the most viewed published articles.
#[utoipa::path(
    get,
    path = "/api/articles/trending",
    tag = ARTICLE_TAG,
    params(LimitParams),
    responses(
        (status = 200, description = "Trending articles", body = ApiResponse<Vec<ArticleSummaryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trending_articles(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = bounded_limit(
        params.limit.as_deref(),
        DEFAULT_HIGHLIGHT_LIMIT,
        MAX_HIGHLIGHT_LIMIT,
    );

    let articles = ArticleService::new(&state.db).get_trending(limit).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(summaries(articles)))))
}

/// List the most recently published featured articles.
#[utoipa::path(
    get,
    path = "/api/articles/featured",
    tag = ARTICLE_TAG,
    params(LimitParams),
    responses(
        (status = 200, description = "Featured articles", body = ApiResponse<Vec<ArticleSummaryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_featured_articles(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = bounded_limit(
        params.limit.as_deref(),
        DEFAULT_HIGHLIGHT_LIMIT,
        MAX_HIGHLIGHT_LIMIT,
    );

    let articles = ArticleService::new(&state.db).get_featured(limit).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(summaries(articles)))))
}

/// Search published articles.
///
/// Case-insensitive substring match over title, excerpt and content, most viewed first.
/// A term shorter than two characters returns an empty first page.
#[utoipa::path(
    get,
    path = "/api/articles/search",
    tag = ARTICLE_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching articles", body = ApiResponse<Vec<ArticleSummaryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_articles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = lenient_page(params.page.as_deref());
    let limit = bounded_limit(params.limit.as_deref(), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);

    let results = ArticleService::new(&state.db)
        .search(params.q.as_deref().unwrap_or_default(), page, limit)
        .await?;
    let meta = results.meta();

    Ok((StatusCode::OK, Json(ApiResponse::paginated(summaries(results.items), meta))))
}

/// Get a published article by slug.
///
/// # Returns
/// - `200 OK` - Full article including content, sections and author profile
/// - `400 Bad Request` - Malformed slug
/// - `404 Not Found` - No published article with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    tag = ARTICLE_TAG,
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Article", body = ApiResponse<ArticleDto>),
        (status = 400, description = "Invalid slug", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(article.into_dto()))))
}

/// List articles sharing the category or a tag with the given article.
#[utoipa::path(
    get,
    path = "/api/articles/{slug}/related",
    tag = ARTICLE_TAG,
    params(
        ("slug" = String, Path, description = "Article slug"),
        LimitParams
    ),
    responses(
        (status = 200, description = "Related articles", body = ApiResponse<Vec<ArticleSummaryDto>>),
        (status = 400, description = "Invalid slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_related_articles(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
    Query(params): Query<LimitParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = bounded_limit(
        params.limit.as_deref(),
        DEFAULT_RELATED_LIMIT,
        MAX_RELATED_LIMIT,
    );

    let articles = ArticleService::new(&state.db)
        .get_related(&slug, limit)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(summaries(articles)))))
}

#[cfg(test)]
mod tests {
    use super::parse_featured;

    #[test]
    fn parses_featured_flag() {
        assert_eq!(parse_featured(None).unwrap(), None);
        assert_eq!(parse_featured(Some("")).unwrap(), None);
        assert_eq!(parse_featured(Some("true")).unwrap(), Some(true));
        assert_eq!(parse_featured(Some("false")).unwrap(), Some(false));
        assert!(parse_featured(Some("yes")).is_err());
    }
}
