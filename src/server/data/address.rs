//! Address link repository.
//!
//! Manages the `entity_addresses` rows tying an owning entity to its ordered, labelled
//! locations. Link rows are replaced wholesale on update: the owner's existing links are
//! deleted and the new list is inserted in order.

use crate::server::model::location::Address;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for owner/location links.
pub struct AddressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressRepository<'a, C> {
    /// Creates a new AddressRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `AddressRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a link for an owner identified by internal id.
    ///
    /// # Arguments
    /// - `owner_id` - Internal id of the owning entity
    /// - `location_id` - Id of the persisted location
    /// - `idx` - Position of the address in the owner's list
    /// - `label` - Optional label such as "home"
    ///
    /// # Returns
    /// - `Ok(())` - Link inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_by_owner_id(
        &self,
        owner_id: i32,
        location_id: i32,
        idx: i32,
        label: Option<String>,
    ) -> Result<(), DbErr> {
        entity::prelude::EntityAddress::insert(entity::entity_address::ActiveModel {
            entity_id: sea_orm::ActiveValue::Set(owner_id),
            location_id: sea_orm::ActiveValue::Set(location_id),
            idx: sea_orm::ActiveValue::Set(idx),
            label: sea_orm::ActiveValue::Set(label),
            ..Default::default()
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Inserts a link for an owner identified by public id.
    ///
    /// Resolves the owner inside the insert statement
    /// (`INSERT ... SELECT id, ... FROM entities WHERE pub_id = ?`).
    ///
    /// # Returns
    /// - `Ok(())` - Link inserted
    /// - `Err(DbErr::RecordNotInserted)` - No entity has that public id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_by_owner_pub_id(
        &self,
        owner_pub_id: &str,
        location_id: i32,
        idx: i32,
        label: Option<String>,
    ) -> Result<(), DbErr> {
        let select = Query::select()
            .column(entity::base_entity::Column::Id)
            .expr(Expr::val(location_id))
            .expr(Expr::val(idx))
            .expr(Expr::val(label))
            .from(entity::prelude::BaseEntity)
            .and_where(Expr::col(entity::base_entity::Column::PubId).eq(owner_pub_id))
            .to_owned();

        let insert = Query::insert()
            .into_table(entity::prelude::EntityAddress)
            .columns([
                entity::entity_address::Column::EntityId,
                entity::entity_address::Column::LocationId,
                entity::entity_address::Column::Idx,
                entity::entity_address::Column::Label,
            ])
            .select_from(select)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_owned();

        let result = self.db.execute(&insert).await?;
        if result.rows_affected() == 0 {
            return Err(DbErr::RecordNotInserted);
        }

        Ok(())
    }

    /// Deletes every link of the owner identified by public id.
    ///
    /// Locations themselves are left in place.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of links removed (zero for an unknown owner)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn reset_by_owner_pub_id(&self, owner_pub_id: &str) -> Result<u64, DbErr> {
        let owner_ids = Query::select()
            .column(entity::base_entity::Column::Id)
            .from(entity::prelude::BaseEntity)
            .and_where(Expr::col(entity::base_entity::Column::PubId).eq(owner_pub_id))
            .to_owned();

        let result = entity::prelude::EntityAddress::delete_many()
            .filter(entity::entity_address::Column::EntityId.in_subquery(owner_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the owner's address list in list order.
    ///
    /// # Returns
    /// - `Ok(Vec<Address>)` - Addresses ordered by `idx` (empty for an unknown owner)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_owner_pub_id(&self, owner_pub_id: &str) -> Result<Vec<Address>, DbErr> {
        let rows = entity::prelude::EntityAddress::find()
            .inner_join(entity::prelude::BaseEntity)
            .filter(entity::base_entity::Column::PubId.eq(owner_pub_id))
            .order_by_asc(entity::entity_address::Column::Idx)
            .find_also_related(entity::prelude::Location)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, location)| location.map(|l| Address::from_entity(link, l)))
            .collect())
    }
}
