use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, CountDto, ErrorDto},
        comment::CommentDto,
    },
    server::{
        error::AppError, middleware::validation::ValidSlug, model::comment::CommentNode,
        service::comment::CommentService, state::AppState,
    },
};

pub static COMMENT_TAG: &str = "comment";

/// Get the comment thread of an article.
///
/// Root comments are newest first; replies at every depth are oldest first. Drafts are
/// included; an unknown article returns an empty list.
///
/// # Returns
/// - `200 OK` - Nested comment forest
/// - `400 Bad Request` - Malformed slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{slug}/comments",
    tag = COMMENT_TAG,
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Comment forest", body = ApiResponse<Vec<CommentDto>>),
        (status = 400, description = "Invalid slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
) -> Result<impl IntoResponse, AppError> {
    let tree = CommentService::new(&state.db)
        .get_tree_by_article_slug(&slug)
        .await?;

    let comments: Vec<CommentDto> = tree.into_iter().map(CommentNode::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(comments))))
}

/// Count every comment, replies included, on an article.
#[utoipa::path(
    get,
    path = "/api/articles/{slug}/comments/count",
    tag = COMMENT_TAG,
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Comment count", body = ApiResponse<CountDto>),
        (status = 400, description = "Invalid slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comment_count(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
) -> Result<impl IntoResponse, AppError> {
    let count = CommentService::new(&state.db)
        .count_by_article_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(CountDto { count }))))
}
