//! Validating extractors for slugs and pagination.
//!
//! Rejections are `AppError::BadRequest`, so they render with the same JSON envelope as
//! every other error. Messages follow the `"<field>: <reason>"` format, joined with
//! `", "` when more than one field is invalid.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};

use crate::server::{error::AppError, model::article::ArticleSort};

pub const DEFAULT_PAGE_LIMIT: u64 = 10;
pub const MAX_PAGE_LIMIT: u64 = 50;

/// Returns true for lowercase alphanumeric words separated by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('-').all(|word| {
            !word.is_empty()
                && word
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

/// A `{slug}` path parameter that passed slug validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSlug(pub String);

impl<S> FromRequestParts<S> for ValidSlug
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(slug) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Invalid parameters: slug: Required".to_string()))?;

        if !is_valid_slug(&slug) {
            return Err(AppError::BadRequest(
                "Invalid parameters: slug: Invalid slug format".to_string(),
            ));
        }

        Ok(Self(slug))
    }
}

/// Validated `page`, `limit` and `sort` query parameters.
///
/// `page` is at least 1, `limit` is clamped to `1..=50`, and `sort` must be one of
/// `latest`, `popular`, `trending` or `oldest`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationQuery {
    pub page: u64,
    pub limit: u64,
    pub sort: ArticleSort,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            sort: ArticleSort::Latest,
        }
    }
}

impl PaginationQuery {
    /// Validates raw query values.
    ///
    /// # Returns
    /// - `Ok(PaginationQuery)` - Values present were well-formed; absent values defaulted
    /// - `Err(AppError::BadRequest)` - Every malformed field, listed in one message
    pub fn parse(
        page: Option<&str>,
        limit: Option<&str>,
        sort: Option<&str>,
    ) -> Result<Self, AppError> {
        let defaults = Self::default();
        let mut issues = Vec::new();

        let page = match page.map(str::trim).filter(|v| !v.is_empty()) {
            None => defaults.page,
            Some(raw) => match raw.parse::<i64>() {
                Ok(value) => value.max(1) as u64,
                Err(_) => {
                    issues.push("page: Expected an integer".to_string());
                    defaults.page
                }
            },
        };

        let limit = match limit.map(str::trim).filter(|v| !v.is_empty()) {
            None => defaults.limit,
            Some(raw) => match raw.parse::<i64>() {
                Ok(value) => value.clamp(1, MAX_PAGE_LIMIT as i64) as u64,
                Err(_) => {
                    issues.push("limit: Expected an integer".to_string());
                    defaults.limit
                }
            },
        };

        let sort = match sort.filter(|v| !v.is_empty()) {
            None => defaults.sort,
            Some(raw) => ArticleSort::from_name(raw).unwrap_or_else(|| {
                issues.push(
                    "sort: Expected 'latest' | 'popular' | 'trending' | 'oldest'".to_string(),
                );
                defaults.sort
            }),
        };

        if !issues.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Invalid query parameters: {}",
                issues.join(", ")
            )));
        }

        Ok(Self { page, limit, sort })
    }
}

impl<S> FromRequestParts<S> for PaginationQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid query parameters: {}", e)))?;

        Self::parse(
            params.get("page").map(String::as_str),
            params.get("limit").map(String::as_str),
            params.get("sort").map(String::as_str),
        )
    }
}

/// Parses an optional `limit` leniently, falling back to `default` for missing,
/// malformed or non-positive values, and capping at `max`.
pub fn bounded_limit(raw: Option<&str>, default: u64, max: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .map(|v| v as u64)
        .unwrap_or(default)
        .min(max)
}

/// Parses an optional 1-based `page` leniently, falling back to 1.
pub fn lenient_page(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .map(|v| v as u64)
        .unwrap_or(1)
}
