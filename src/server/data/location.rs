//! Location data repository.
//!
//! Locations are only ever inserted here. An address list edit that changes an address
//! creates a new row rather than updating the old one, so rows shared by several lists
//! are never rewritten underneath another owner.

use crate::server::model::location::CreateLocationParam;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Repository providing database operations for locations.
///
/// Generic over the connection so it can run inside an open transaction.
pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    /// Creates a new LocationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `LocationRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a location row from a complete location.
    ///
    /// # Arguments
    /// - `param` - Values of the new row
    ///
    /// # Returns
    /// - `Ok(i32)` - Id assigned to the new row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateLocationParam) -> Result<i32, DbErr> {
        let model = entity::location::ActiveModel {
            address1: ActiveValue::Set(param.address1),
            address2: ActiveValue::Set(param.address2),
            city: ActiveValue::Set(param.city),
            state: ActiveValue::Set(param.state),
            zip: ActiveValue::Set(param.zip),
            lat: ActiveValue::Set(param.lat),
            lng: ActiveValue::Set(param.lng),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(model.id)
    }
}
