//! Factory for users together with their backing `entities` row.

use crate::factory::{base_entity::EntityFactory, helpers::next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let (entity, user) = UserFactory::new(&db)
///     .legal_id("123-45-6789", "SSN")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    auth_id: Option<String>,
    legal_id: Option<String>,
    legal_id_type: Option<String>,
    active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - auth_id: `"auth|{id}"` where id is auto-incremented
    /// - legal_id / legal_id_type: `None`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            auth_id: Some(format!("auth|{}", next_id())),
            legal_id: None,
            legal_id_type: None,
            active: true,
        }
    }

    pub fn auth_id(mut self, auth_id: Option<String>) -> Self {
        self.auth_id = auth_id;
        self
    }

    pub fn legal_id(mut self, legal_id: impl Into<String>, legal_id_type: impl Into<String>) -> Self {
        self.legal_id = Some(legal_id.into());
        self.legal_id_type = Some(legal_id_type.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the entity row followed by the user row.
    ///
    /// # Returns
    /// - `Ok((entity, user))` - The created rows
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::base_entity::Model, entity::user::Model), DbErr> {
        let entity = EntityFactory::new(self.db).build().await?;

        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(entity.id),
            auth_id: ActiveValue::Set(self.auth_id),
            legal_id: ActiveValue::Set(self.legal_id),
            legal_id_type: ActiveValue::Set(self.legal_id_type),
            active: ActiveValue::Set(self.active),
        }
        .insert(self.db)
        .await?;

        Ok((entity, user))
    }
}

/// Creates a user with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((entity, user))` - The created rows
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(
    db: &DatabaseConnection,
) -> Result<(entity::base_entity::Model, entity::user::Model), DbErr> {
    UserFactory::new(db).build().await
}
