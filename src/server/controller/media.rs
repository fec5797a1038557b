use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        media::MediaDto,
    },
    server::{
        error::AppError,
        middleware::validation::{bounded_limit, lenient_page},
        model::media::Media,
        service::media::{MediaService, DEFAULT_MEDIA_LIMIT, MAX_MEDIA_LIMIT},
        state::AppState,
    },
};

pub static MEDIA_TAG: &str = "media";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MediaListParams {
    pub page: Option<String>,
    /// Page size, default 20, at most 50
    pub limit: Option<String>,
    /// Restrict to one folder
    pub folder: Option<String>,
}

/// Parses a media ID path segment.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid ID format".to_string()))
}

/// List media, newest first.
#[utoipa::path(
    get,
    path = "/api/media",
    tag = MEDIA_TAG,
    params(MediaListParams),
    responses(
        (status = 200, description = "Page of media", body = ApiResponse<Vec<MediaDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_media(
    State(state): State<AppState>,
    Query(params): Query<MediaListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = lenient_page(params.page.as_deref());
    let limit = bounded_limit(params.limit.as_deref(), DEFAULT_MEDIA_LIMIT, MAX_MEDIA_LIMIT);
    let folder = params.folder.as_deref().filter(|f| !f.is_empty());

    let media = MediaService::new(&state.db)
        .get_paginated(folder, page, limit)
        .await?;
    let meta = media.meta();

    let media: Vec<MediaDto> = media.items.into_iter().map(Media::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::paginated(media, meta))))
}

/// List the distinct folders media is filed under.
#[utoipa::path(
    get,
    path = "/api/media/folders",
    tag = MEDIA_TAG,
    responses(
        (status = 200, description = "Folder names, sorted", body = ApiResponse<Vec<String>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_media_folders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let folders = MediaService::new(&state.db).get_folders().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(folders))))
}

/// Get a media item by numeric ID.
///
/// # Returns
/// - `200 OK` - Media item
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No media with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/media/{id}",
    tag = MEDIA_TAG,
    params(
        ("id" = i32, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Media item", body = ApiResponse<MediaDto>),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Media not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_media_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let media = MediaService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Media not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(media.into_dto()))))
}
