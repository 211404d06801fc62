use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Declares which tables a test needs before the in-memory database is opened.
///
/// ```rust,ignore
/// let mut test = TestBuilder::new().with_address_tables().build().await?;
/// let db = test.database().await?;
/// ```
pub struct TestBuilder {
    /// Executed in insertion order, so referenced tables must come first.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the CREATE TABLE statement SeaORM derives for `entity`.
    ///
    /// Foreign keys declared on the entity are part of the statement, and SQLite
    /// enforces them, so a link table added before its parents fails to build.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Entities, locations and the link table between them.
    pub fn with_address_tables(self) -> Self {
        self.with_table(BaseEntity)
            .with_table(Location)
            .with_table(EntityAddress)
    }

    /// Address tables plus `users`, which shares its key with `entities`.
    pub fn with_user_tables(self) -> Self {
        self.with_address_tables().with_table(User)
    }

    /// Opens the database and creates every queued table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose schema is ready to use
    /// - `Err(TestError::Database)` - Connecting or a CREATE TABLE statement failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
