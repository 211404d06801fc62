//! Address lists of existing entities.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{address::AddressRepository, entity::EntityRepository},
    error::AppError,
    geocode::Geocoder,
    model::location::{promote_changes, Address},
    service::{address_list::AddressListService, location::LocationService},
};

pub struct EntityService<'a> {
    db: &'a DatabaseConnection,
    geocoder: &'a dyn Geocoder,
}

impl<'a> EntityService<'a> {
    pub fn new(db: &'a DatabaseConnection, geocoder: &'a dyn Geocoder) -> Self {
        Self { db, geocoder }
    }

    /// Gets an entity's address list in list order.
    ///
    /// # Returns
    /// - `Ok(Vec<Address>)` - Addresses ordered by idx
    /// - `Err(AppError::NotFound)` - No entity with that public id
    pub async fn get_addresses(&self, pub_id: &str) -> Result<Vec<Address>, AppError> {
        self.require_entity(pub_id).await?;

        Ok(AddressRepository::new(self.db)
            .get_by_owner_pub_id(pub_id)
            .await?)
    }

    /// Replaces an entity's address list.
    ///
    /// Addresses that need a new location are completed first; addresses referencing a
    /// stored location keep it as is. The links are then replaced in a single transaction
    /// and the stored list is read back.
    ///
    /// # Returns
    /// - `Ok((addresses, change_desc))` - Stored list and the change records of
    ///   completion, tagged with their address position
    /// - `Err(AppError::NotFound)` - No entity with that public id
    /// - `Err(AppError::AddressCompletionErr)` - An address could not be completed; nothing written
    /// - `Err(AppError)` - A write failed; the transaction was rolled back
    pub async fn replace_addresses(
        &self,
        pub_id: &str,
        mut addresses: Vec<Address>,
    ) -> Result<(Vec<Address>, Vec<String>), AppError> {
        self.require_entity(pub_id).await?;

        LocationService::new(self.geocoder)
            .complete_new_addresses(&mut addresses)
            .await?;
        let change_desc = promote_changes(&addresses, Vec::new());

        let txn = self.db.begin().await?;
        AddressListService::new(&txn)
            .update_address_list(pub_id, &mut addresses)
            .await?;
        txn.commit().await?;

        let stored = AddressRepository::new(self.db)
            .get_by_owner_pub_id(pub_id)
            .await?;

        tracing::info!(
            "Replaced address list of entity {} ({} address(es), {} change(s))",
            pub_id,
            stored.len(),
            change_desc.len()
        );

        Ok((stored, change_desc))
    }

    async fn require_entity(&self, pub_id: &str) -> Result<(), AppError> {
        EntityRepository::new(self.db)
            .find_by_pub_id(pub_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Entity {} not found", pub_id)))?;

        Ok(())
    }
}
