//! SeaORM entity models for the blog content schema.
//!
//! One module per table. The `prelude` module re-exports every `Entity` under its
//! table name so callers can write `Article::find()` instead of
//! `entity::article::Entity::find()`.

pub mod prelude;

pub mod article;
pub mod article_tag;
pub mod author;
pub mod category;
pub mod comment;
pub mod media;
pub mod navigation;
pub mod navigation_item;
pub mod page;
pub mod page_group;
pub mod sea_orm_active_enums;
pub mod site_setting;
pub mod tag;
