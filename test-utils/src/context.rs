use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Per-test handle on an in-memory SQLite database.
///
/// The in-memory pool holds a single connection, so a test with an open
/// transaction must not touch `db` until it commits or rolls back.
pub struct TestContext {
    /// Opened on the first call to `database()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening `sqlite::memory:` on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Database(sea_orm::DbErr::Custom("no test database".into())))
    }

    /// Runs `stmts` in order against the test database.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }
}
