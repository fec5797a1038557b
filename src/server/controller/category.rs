use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        category::{CategoryArticlesDto, CategoryDto},
    },
    server::{
        error::AppError,
        middleware::validation::{PaginationQuery, ValidSlug},
        model::{article::Article, category::Category},
        service::category::CategoryService,
        state::AppState,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List every category with its published article count.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Categories in display order", body = ApiResponse<Vec<CategoryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let categories: Vec<CategoryDto> = categories.into_iter().map(Category::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(categories))))
}

/// Get a category by slug.
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    tag = CATEGORY_TAG,
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Invalid slug", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(category.into_dto()))))
}

/// Get a category together with a page of its published articles.
///
/// # Returns
/// - `200 OK` - `{category, articles}` with pagination meta for the articles
/// - `400 Bad Request` - Malformed slug or pagination parameters
/// - `404 Not Found` - Unknown category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/categories/{slug}/articles",
    tag = CATEGORY_TAG,
    params(
        ("slug" = String, Path, description = "Category slug"),
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 50"),
        ("sort" = Option<String>, Query, description = "latest | popular | trending | oldest")
    ),
    responses(
        (status = 200, description = "Category and its articles", body = ApiResponse<CategoryArticlesDto>),
        (status = 400, description = "Invalid parameters", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category_articles(
    State(state): State<AppState>,
    ValidSlug(slug): ValidSlug,
    pagination: PaginationQuery,
) -> Result<impl IntoResponse, AppError> {
    let (category, articles) = CategoryService::new(&state.db)
        .get_articles(&slug, pagination)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
    let meta = articles.meta();

    let dto = CategoryArticlesDto {
        category: category.into_dto(),
        articles: articles
            .items
            .into_iter()
            .map(Article::into_summary_dto)
            .collect(),
    };

    Ok((StatusCode::OK, Json(ApiResponse::paginated(dto, meta))))
}
