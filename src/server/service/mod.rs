//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! resolve slugs to owning rows, decide what an unknown owner means for each endpoint,
//! convert entity bundles into domain models, and assemble nested structures such as the
//! comment forest and navigation trees.

pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod media;
pub mod navigation;
pub mod page;
pub mod setting;
pub mod tag;
