//! Base entity repository.
//!
//! Creates and resolves the `entities` rows shared by every owned resource. Public ids
//! are minted here as random UUIDs; owners are referenced by public id at the API and
//! resolved to internal ids on write.

use crate::server::model::entity::{CreateEntityParam, Entity};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Repository providing database operations for base entities.
pub struct EntityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EntityRepository<'a, C> {
    /// Creates a new EntityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `EntityRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an entity row with a freshly minted public id.
    ///
    /// An `owner_pub_id` that matches no entity leaves the new entity unowned.
    ///
    /// # Arguments
    /// - `param` - Owner and visibility of the new entity
    ///
    /// # Returns
    /// - `Ok(Entity)` - The created entity
    /// - `Err(DbErr)` - Database error during owner lookup or insert
    pub async fn create(&self, param: CreateEntityParam) -> Result<Entity, DbErr> {
        let owner = match &param.owner_pub_id {
            Some(owner_pub_id) => self.find_model_by_pub_id(owner_pub_id).await?,
            None => None,
        };

        let model = entity::base_entity::ActiveModel {
            pub_id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            owner_id: ActiveValue::Set(owner.as_ref().map(|o| o.id)),
            publicly_readable: ActiveValue::Set(param.publicly_readable),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Entity::from_entity(model, owner.map(|o| o.pub_id)))
    }

    /// Finds an entity by its public id, resolving its owner's public id.
    ///
    /// # Returns
    /// - `Ok(Some(Entity))` - Entity found
    /// - `Ok(None)` - No entity with that public id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_pub_id(&self, pub_id: &str) -> Result<Option<Entity>, DbErr> {
        let Some(model) = self.find_model_by_pub_id(pub_id).await? else {
            return Ok(None);
        };

        let owner_pub_id = match model.owner_id {
            Some(owner_id) => entity::prelude::BaseEntity::find_by_id(owner_id)
                .one(self.db)
                .await?
                .map(|owner| owner.pub_id),
            None => None,
        };

        Ok(Some(Entity::from_entity(model, owner_pub_id)))
    }

    async fn find_model_by_pub_id(
        &self,
        pub_id: &str,
    ) -> Result<Option<entity::base_entity::Model>, DbErr> {
        entity::prelude::BaseEntity::find()
            .filter(entity::base_entity::Column::PubId.eq(pub_id))
            .one(self.db)
            .await
    }
}
