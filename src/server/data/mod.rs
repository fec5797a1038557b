//! Database repository layer for all content entities.
//!
//! Repositories wrap SeaORM queries for one table (plus whatever related rows its callers
//! need) and return entity models or entity bundles. Every query here is read-only, and
//! any query touching articles or pages restricts itself to published rows.

pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod media;
pub mod navigation;
pub mod page;
pub mod setting;
pub mod tag;

#[cfg(test)]
mod test;
