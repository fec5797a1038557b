//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique ID generation, deterministic timestamps and a convenience
//! method for creating an article together with its dependencies.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory;

/// Counter for generating unique slugs and names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Fixed reference instant used as the default timestamp for factory rows.
///
/// Tests that care about ordering offset from this value with `minutes_after`
/// rather than relying on wall-clock time.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Returns `base_time()` shifted forward by the given number of minutes.
pub fn minutes_after(minutes: i64) -> DateTime<Utc> {
    base_time() + Duration::minutes(minutes)
}

/// Creates a published article along with the author and category it belongs to.
///
/// All entities are created with default values. Use the individual factories if
/// you need to customize specific entities.
///
/// # Returns
/// - `Ok((author, category, article))` - The created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_article_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::author::Model,
        entity::category::Model,
        entity::article::Model,
    ),
    DbErr,
> {
    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let article = factory::create_article(db, category.id, author.id).await?;

    Ok((author, category, article))
}
