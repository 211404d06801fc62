//! User data repository.
//!
//! A `users` row shares its primary key with the backing `entities` row, so creating a
//! user always follows creating its entity in the same transaction.

use crate::server::{
    data::entity::EntityRepository,
    model::user::{CreateUserParam, User},
};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Repository providing database operations for users.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the user row for an already created entity.
    ///
    /// # Arguments
    /// - `entity_id` - Internal id of the backing entity
    /// - `param` - Authentication, legal id and activity fields
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        entity_id: i32,
        param: &CreateUserParam,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(entity_id),
            auth_id: ActiveValue::Set(param.auth_id.clone()),
            legal_id: ActiveValue::Set(param.legal_id.clone()),
            legal_id_type: ActiveValue::Set(param.legal_id_type.clone()),
            active: ActiveValue::Set(param.active),
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by the public id of its backing entity.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No entity with that public id, or the entity is not a user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_pub_id(&self, pub_id: &str) -> Result<Option<User>, DbErr> {
        let Some(entity) = EntityRepository::new(self.db).find_by_pub_id(pub_id).await? else {
            return Ok(None);
        };

        let user = entity::prelude::User::find_by_id(entity.id)
            .one(self.db)
            .await?;

        Ok(user.map(|user| User::from_entity(entity, user)))
    }
}
