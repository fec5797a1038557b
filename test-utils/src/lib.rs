//! Inkstand Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! inkstand content API. This crate offers a builder pattern for creating test contexts
//! with in-memory SQLite databases and factories for seeding content.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert content rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_article_lookup() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_content_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let article = factory::helpers::create_article_with_dependencies(db).await?;
//!     // Query the article...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
