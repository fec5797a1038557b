//! Wire-format DTOs shared by every endpoint.
//!
//! Everything in here serializes with camelCase field names and derives `ToSchema` so the
//! OpenAPI document stays in sync with the JSON the API actually returns.

pub mod api;
pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod media;
pub mod navigation;
pub mod page;
pub mod setting;
pub mod tag;
