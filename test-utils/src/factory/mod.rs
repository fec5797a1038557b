//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_author(&db).await?;
//! let category = factory::create_category(&db).await?;
//! let article = factory::create_article(&db, category.id, author.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::article::ArticleFactory;
//!
//! let article = ArticleFactory::new(&db, category.id, author.id)
//!     .slug("rust-ownership")
//!     .views(1_000)
//!     .featured(true)
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod author;
pub mod category;
pub mod comment;
pub mod helpers;
pub mod media;
pub mod navigation;
pub mod page;
pub mod site_setting;
pub mod tag;

// Re-export commonly used factory functions for concise usage
pub use article::{attach_tag, create_article};
pub use author::create_author;
pub use category::create_category;
pub use comment::create_comment;
pub use media::create_media;
pub use navigation::{create_navigation, create_navigation_item};
pub use page::{create_page, create_page_group};
pub use site_setting::create_setting;
pub use tag::create_tag;
