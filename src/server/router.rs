//! Route table and OpenAPI document.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        article, author, category, comment, health, media, navigation, page, setting, tag,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inkstand API",
        description = "Read-only API serving published blog content"
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "article", description = "Published articles"),
        (name = "comment", description = "Article comment threads"),
        (name = "category", description = "Article categories"),
        (name = "tag", description = "Article tags"),
        (name = "author", description = "Author profiles"),
        (name = "page", description = "Standalone pages and page groups"),
        (name = "media", description = "Media library"),
        (name = "navigation", description = "Navigation menus"),
        (name = "setting", description = "Public site settings")
    )
)]
struct ApiDoc;

/// Builds every API route along with the OpenAPI document describing them.
///
/// Static segments such as `/api/articles/trending` take precedence over `{slug}`
/// captures at the same depth.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(article::get_articles))
        .routes(routes!(article::get_trending_articles))
        .routes(routes!(article::get_featured_articles))
        .routes(routes!(article::search_articles))
        .routes(routes!(article::get_article))
        .routes(routes!(article::get_related_articles))
        .routes(routes!(comment::get_article_comments))
        .routes(routes!(comment::get_article_comment_count))
        .routes(routes!(category::get_categories))
        .routes(routes!(category::get_category))
        .routes(routes!(category::get_category_articles))
        .routes(routes!(tag::get_tags))
        .routes(routes!(tag::get_tag))
        .routes(routes!(tag::get_tag_articles))
        .routes(routes!(author::get_authors))
        .routes(routes!(author::get_author))
        .routes(routes!(author::get_author_articles))
        .routes(routes!(page::get_pages))
        .routes(routes!(page::get_pages_by_group))
        .routes(routes!(page::get_page))
        .routes(routes!(page::get_page_groups))
        .routes(routes!(page::get_page_group))
        .routes(routes!(media::get_media))
        .routes(routes!(media::get_media_folders))
        .routes(routes!(media::get_media_item))
        .routes(routes!(navigation::get_navigations))
        .routes(routes!(navigation::get_navigation))
        .routes(routes!(setting::get_settings))
        .routes(routes!(setting::get_settings_object))
        .routes(routes!(setting::get_settings_by_group))
        .routes(routes!(setting::get_setting))
        .split_for_parts()
}
