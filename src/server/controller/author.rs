use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        article::ArticleSummaryDto,
        author::AuthorDto,
    },
    server::{
        error::AppError,
        middleware::validation::{PaginationQuery, ValidSlug},
        model::{article::Article, author::Author},
        service::author::AuthorService,
        state::AppState,
    },
};

pub static AUTHOR_TAG: &str = "author";

/// List every author profile. Email addresses are never included.
#[utoipa::path(
    get,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    responses(
        (status = 200, description = "Authors ordered by name", body = ApiResponse<Vec<AuthorDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_authors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let authors = AuthorService::new(&state.db).get_all().await?;

    let authors: Vec<AuthorDto> = authors.into_iter().map(Author::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(authors))))
}

#[utoipa::path(
    get,
    path = "/api/authors/{slug}",
    tag = AUTHOR_TAG,
    params(
        ("slug" = String, Path, description = "Author slug")
    ),
    responses(
        (status = 200, description = "Author", body = ApiResponse<AuthorDto>),
        (status = 400, description = "Invalid slug", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
) -> Result<impl IntoResponse, AppError> {
    let author = AuthorService::new(&state.db)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Author not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(author.into_dto()))))
}

/// List an author's published articles. An unknown author returns an empty page.
#[utoipa::path(
    get,
    path = "/api/authors/{slug}/articles",
    tag = AUTHOR_TAG,
    params(
        ("slug" = String, Path, description = "Author slug"),
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 50"),
        ("sort" = Option<String>, Query, description = "latest | popular | trending | oldest")
    ),
    responses(
        (status = 200, description = "Page of articles", body = ApiResponse<Vec<ArticleSummaryDto>>),
        (status = 400, description = "Invalid parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author_articles(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
    pagination: PaginationQuery,
) -> Result<impl IntoResponse, AppError> {
    let articles = AuthorService::new(&state.db)
        .get_articles(&slug, pagination)
        .await?;
    let meta = articles.meta();

    let articles: Vec<ArticleSummaryDto> = articles
        .items
        .into_iter()
        .map(Article::into_summary_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::paginated(articles, meta))))
}
