use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// A private in-memory SQLite database holding the tables one test asked for.
pub struct TestContext {
    /// Set by [`TestContext::connect`]. Tests that need an owned connection can `take()` it.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Opens a fresh `sqlite::memory:` database and runs the CREATE TABLE statements in
    /// the order given, so referenced tables must come before the tables that reference them.
    pub async fn connect(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for table in &tables {
            db.execute(table).await?;
        }

        Ok(Self { db: Some(db) })
    }
}
