use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        navigation::NavigationDto,
    },
    server::{
        error::AppError, model::navigation::Navigation, service::navigation::NavigationService,
        state::AppState,
    },
};

pub static NAVIGATION_TAG: &str = "navigation";

/// List every navigation menu with its item tree.
#[utoipa::path(
    get,
    path = "/api/navigation",
    tag = NAVIGATION_TAG,
    responses(
        (status = 200, description = "Navigation menus", body = ApiResponse<Vec<NavigationDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_navigations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let navigations = NavigationService::new(&state.db).get_all().await?;

    let navigations: Vec<NavigationDto> = navigations
        .into_iter()
        .map(Navigation::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(navigations))))
}

#[utoipa::path(
    get,
    path = "/api/navigation/{slug}",
    tag = NAVIGATION_TAG,
    params(
        ("slug" = String, Path, description = "Navigation slug, e.g. `header`")
    ),
    responses(
        (status = 200, description = "Navigation menu", body = ApiResponse<NavigationDto>),
        (status = 404, description = "Navigation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_navigation(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let navigation = NavigationService::new(&state.db)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Navigation not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(navigation.into_dto()))))
}
