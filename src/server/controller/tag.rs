use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        article::ArticleSummaryDto,
        tag::TagDto,
    },
    server::{
        error::AppError,
        middleware::validation::{PaginationQuery, ValidSlug},
        model::{article::Article, tag::Tag},
        service::tag::TagService,
        state::AppState,
    },
};

pub static TAG_TAG: &str = "tag";

#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Tags ordered by name", body = ApiResponse<Vec<TagDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let tags = TagService::new(&state.db).get_all().await?;

    let tags: Vec<TagDto> = tags.into_iter().map(Tag::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(tags))))
}

#[utoipa::path(
    get,
    path = "/api/tags/{slug}",
    tag = TAG_TAG,
    params(
        ("slug" = String, Path, description = "Tag slug")
    ),
    responses(
        (status = 200, description = "Tag", body = ApiResponse<TagDto>),
        (status = 400, description = "Invalid slug", body = ErrorDto),
        (status = 404, description = "Tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
) -> Result<impl IntoResponse, AppError> {
    let tag = TagService::new(&state.db)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(tag.into_dto()))))
}

/// List published articles carrying a tag. An unknown tag returns an empty page.
#[utoipa::path(
    get,
    path = "/api/tags/{slug}/articles",
    tag = TAG_TAG,
    params(
        ("slug" = String, Path, description = "Tag slug"),
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
pub async fn get_tag_articles(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
    pagination: PaginationQuery,
) -> Result<impl IntoResponse, AppError> {
    let page = TagService::new(&state.db)
        .get_articles(&slug, pagination)
        .await?;
    let meta = page.meta();

    let articles: Vec<ArticleSummaryDto> = page
        .items
        .into_iter()
        .map(Article::into_summary_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::paginated(articles, meta))))
}
