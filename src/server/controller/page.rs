use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        page::{PageDto, PageGroupDto, PageGroupWithPagesDto},
    },
    server::{
        error::AppError,
        middleware::validation::ValidSlug,
        model::page::{Page, PageGroup},
        service::page::PageService,
        state::AppState,
    },
};

pub static PAGE_TAG: &str = "page";

fn page_dtos(pages: Vec<Page>) -> Vec<PageDto> {
    pages.into_iter().map(Page::into_dto).collect()
}

/// List every published page in display order.
#[utoipa::path(
    get,
    path = "/api/pages",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Published pages", body = ApiResponse<Vec<PageDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pages = PageService::new(&state.db).get_published().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(page_dtos(pages)))))
}

/// List the published pages of a group. An unknown group returns an empty list.
#[utoipa::path(
    get,
    path = "/api/pages/group/{group}",
    tag = PAGE_TAG,
    params(
        ("group" = String, Path, description = "Page group slug")
    ),
    responses(
        (status = 200, description = "Published pages of the group", body = ApiResponse<Vec<PageDto>>),
        (status = 400, description = "Invalid slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pages_by_group(
    State(state): State<AppState>,
    ValidSlug(group): ValidSlug,
) -> Result<impl IntoResponse, AppError> {
    let pages = PageService::new(&state.db).get_by_group(&group).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(page_dtos(pages)))))
}

#[utoipa::path(
    get,
    path = "/api/pages/{slug}",
    tag = PAGE_TAG,
    params(
        ("slug" = String, Path, description = "Page slug")
    ),
    responses(
        (status = 200, description = "Page with content blocks", body = ApiResponse<PageDto>),
        (status = 400, description = "Invalid slug", body = ErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
) -> Result<impl IntoResponse, AppError> {
    let page = PageService::new(&state.db)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Page not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(page.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/api/page-groups",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Page groups in display order", body = ApiResponse<Vec<PageGroupDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = PageService::new(&state.db).get_groups().await?;

    let groups: Vec<PageGroupDto> = groups.into_iter().map(PageGroup::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(groups))))
}

/// Get a page group with its published pages.
#[utoipa::path(
    get,
    path = "/api/page-groups/{slug}",
    tag = PAGE_TAG,
    params(
        ("slug" = String, Path, description = "Page group slug")
    ),
    responses(
        (status = 200, description = "Group and its pages", body = ApiResponse<PageGroupWithPagesDto>),
        (status = 400, description = "Invalid slug", body = ErrorDto),
        (status = 404, description = "Page group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page_group(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
) -> Result<impl IntoResponse, AppError> {
    let (group, pages) = PageService::new(&state.db)
        .get_group_with_pages(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Page group not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(PageGroupWithPagesDto {
        group: group.into_dto(),
        pages: page_dtos(pages),
    }))))
}
