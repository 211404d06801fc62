//! Address list synchronization.
//!
//! Writes an owner's ordered address list inside a transaction supplied by the caller.
//! Each address gets `idx` from its position in the list. Lists are always written in
//! full: creating persists every location, updating deletes the owner's links and
//! re-inserts them from the input.
//!
//! Locations must already be complete; run `LocationService::complete_addresses` before
//! opening the transaction. Any failure aborts the routine and the caller rolls back.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{address::AddressRepository, location::LocationRepository},
    error::{
        storage::{StorageError, StorageStep},
        AppError,
    },
    model::location::{Address, CreateLocationParam},
};

/// Where the location of an updated address comes from.
enum LinkedLocation {
    Create(CreateLocationParam),
    Existing(i32),
}

pub struct AddressListService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AddressListService<'a, C> {
    /// Creates a new AddressListService instance.
    ///
    /// # Arguments
    /// - `db` - Open transaction (or connection) every statement is issued against
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Writes the address list of a newly created owner.
    ///
    /// Every location is inserted as a new row, whatever id it carries, and the new id is
    /// written back into the address. All locations are checked for completeness before
    /// the first write.
    ///
    /// # Arguments
    /// - `owner_id` - Internal id of the owning entity
    /// - `addresses` - Complete addresses in list order
    ///
    /// # Returns
    /// - `Ok(())` - Every location and link was written
    /// - `Err(AppError::LocationErr(IncompleteLocation))` - An address is incomplete; nothing written
    /// - `Err(AppError::StorageErr)` - A statement failed; the step is named in the error
    pub async fn create_address_list(
        &self,
        owner_id: i32,
        addresses: &mut [Address],
    ) -> Result<(), AppError> {
        let params = addresses
            .iter()
            .map(|address| address.location.to_create_param())
            .collect::<Result<Vec<_>, _>>()?;

        let location_repo = LocationRepository::new(self.db);
        let address_repo = AddressRepository::new(self.db);

        for (position, (address, param)) in addresses.iter_mut().zip(params).enumerate() {
            let idx = position as i32;

            let location_id = location_repo
                .create(param)
                .await
                .map_err(|e| StorageError::new(StorageStep::CreateLocation, e))?;
            address.location.id = Some(location_id);
            address.idx = Some(idx);

            address_repo
                .insert_by_owner_id(owner_id, location_id, idx, address.label.clone())
                .await
                .map_err(|e| StorageError::new(StorageStep::InsertLink, e))?;
        }

        tracing::debug!(
            "Created address list of {} for entity {}",
            addresses.len(),
            owner_id
        );

        Ok(())
    }

    /// Replaces the address list of an existing owner.
    ///
    /// The owner's links are deleted first. Addresses whose location id is absent or
    /// negative get a new location row; any other id is linked as given without checking
    /// who else links it. New locations are checked for completeness before the first
    /// write.
    ///
    /// # Arguments
    /// - `owner_pub_id` - Public id of the owning entity
    /// - `addresses` - Addresses in list order
    ///
    /// # Returns
    /// - `Ok(())` - The stored list now matches `addresses`
    /// - `Err(AppError::LocationErr(IncompleteLocation))` - A new address is incomplete; nothing written
    /// - `Err(AppError::StorageErr)` - A statement failed; the step is named in the error
    pub async fn update_address_list(
        &self,
        owner_pub_id: &str,
        addresses: &mut [Address],
    ) -> Result<(), AppError> {
        let params = addresses
            .iter()
            .map(|address| match address.location.id {
                Some(id) if id >= 0 => Ok(LinkedLocation::Existing(id)),
                _ => address
                    .location
                    .to_create_param()
                    .map(LinkedLocation::Create),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let location_repo = LocationRepository::new(self.db);
        let address_repo = AddressRepository::new(self.db);

        let removed = address_repo
            .reset_by_owner_pub_id(owner_pub_id)
            .await
            .map_err(|e| StorageError::new(StorageStep::ResetLinks, e))?;

        let mut created = 0;
        for (position, (address, linked)) in addresses.iter_mut().zip(params).enumerate() {
            let idx = position as i32;

            let location_id = match linked {
                LinkedLocation::Create(param) => {
                    created += 1;
                    location_repo
                        .create(param)
                        .await
                        .map_err(|e| StorageError::new(StorageStep::CreateLocation, e))?
                }
                LinkedLocation::Existing(id) => id,
            };
            address.location.id = Some(location_id);
            address.idx = Some(idx);

            address_repo
                .insert_by_owner_pub_id(owner_pub_id, location_id, idx, address.label.clone())
                .await
                .map_err(|e| StorageError::new(StorageStep::InsertLink, e))?;
        }

        tracing::debug!(
            "Replaced {} address link(s) of entity {} with {} ({} new location(s))",
            removed,
            owner_pub_id,
            addresses.len(),
            created
        );

        Ok(())
    }
}
