use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        setting::{SettingDto, SettingsObjectDto},
    },
    server::{
        error::AppError, model::setting::Setting, service::setting::SettingService,
        state::AppState,
    },
};

pub static SETTING_TAG: &str = "setting";

fn setting_dtos(settings: Vec<Setting>) -> Vec<SettingDto> {
    settings.into_iter().map(Setting::into_dto).collect()
}

/// List every public site setting.
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTING_TAG,
    responses(
        (status = 200, description = "Public settings ordered by key", body = ApiResponse<Vec<SettingDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let settings = SettingService::new(&state.db).get_public().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(setting_dtos(settings)))))
}

/// Get every public setting as a single `{key: value}` object.
#[utoipa::path(
    get,
    path = "/api/settings/object",
    tag = SETTING_TAG,
    responses(
        (status = 200, description = "Settings keyed by name", body = ApiResponse<SettingsObjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings_object(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let object = SettingService::new(&state.db).get_public_object().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(SettingsObjectDto(object)))))
}

/// List the public settings of one group.
///
/// # Returns
/// - `200 OK` - Settings of the group, possibly empty
/// - `404 Not Found` - Group name is not one of general, seo, social, appearance,
///   contact, analytics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/settings/group/{group}",
    tag = SETTING_TAG,
    params(
        ("group" = String, Path, description = "Setting group")
    ),
    responses(
        (status = 200, description = "Settings of the group", body = ApiResponse<Vec<SettingDto>>),
        (status = 404, description = "Setting group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings_by_group(
    State(state): State<AppState>,
    Path(group): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let settings = SettingService::new(&state.db)
        .get_public_by_group(&group)
        .await?
        .ok_or_else(|| AppError::NotFound("Setting group not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(setting_dtos(settings)))))
}

#[utoipa::path(
    get,
    path = "/api/settings/{key}",
    tag = SETTING_TAG,
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "Setting", body = ApiResponse<SettingDto>),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let setting = SettingService::new(&state.db)
        .get_public_by_key(&key)
        .await?
        .ok_or_else(|| AppError::NotFound("Setting not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(setting.into_dto()))))
}
