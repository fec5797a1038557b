//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the service boundary and transformed
//! to DTOs at the controller boundary. Repositories hand back entity bundles (an entity
//! plus the related rows it needs) which the service layer turns into these models.

pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod media;
pub mod navigation;
pub mod page;
pub mod setting;
pub mod tag;
