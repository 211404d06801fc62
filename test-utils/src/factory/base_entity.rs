//! Factory for `entities` rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test entities with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let owned = EntityFactory::new(&db)
///     .owner_id(Some(owner.id))
///     .publicly_readable(true)
///     .build()
///     .await?;
/// ```
pub struct EntityFactory<'a> {
    db: &'a DatabaseConnection,
    pub_id: String,
    owner_id: Option<i32>,
    publicly_readable: bool,
}

impl<'a> EntityFactory<'a> {
    /// Creates a new EntityFactory with default values.
    ///
    /// Defaults:
    /// - pub_id: `"entity-{id}"` where id is auto-incremented
    /// - owner_id: `None`
    /// - publicly_readable: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            pub_id: format!("entity-{}", next_id()),
            owner_id: None,
            publicly_readable: false,
        }
    }

    pub fn pub_id(mut self, pub_id: impl Into<String>) -> Self {
        self.pub_id = pub_id.into();
        self
    }

    pub fn owner_id(mut self, owner_id: Option<i32>) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn publicly_readable(mut self, publicly_readable: bool) -> Self {
        self.publicly_readable = publicly_readable;
        self
    }

    /// Builds and inserts the entity row.
    ///
    /// # Returns
    /// - `Ok(entity::base_entity::Model)` - The created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::base_entity::Model, DbErr> {
        entity::base_entity::ActiveModel {
            id: ActiveValue::NotSet,
            pub_id: ActiveValue::Set(self.pub_id),
            owner_id: ActiveValue::Set(self.owner_id),
            publicly_readable: ActiveValue::Set(self.publicly_readable),
            last_updated: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an entity with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::base_entity::Model)` - The created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_entity(db: &DatabaseConnection) -> Result<entity::base_entity::Model, DbErr> {
    EntityFactory::new(db).build().await
}
