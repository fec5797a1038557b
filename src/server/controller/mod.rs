//! HTTP request handlers.
//!
//! Controllers validate path and query input, call the matching service, and convert
//! domain models into DTOs wrapped in the `ApiResponse` envelope. Every handler is
//! annotated with `#[utoipa::path]` so the router can collect it into the OpenAPI document.

pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod health;
pub mod media;
pub mod navigation;
pub mod page;
pub mod setting;
pub mod tag;
