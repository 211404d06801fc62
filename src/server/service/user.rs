//! User creation and lookup.
//!
//! Creating a user writes three things atomically: the backing entity, the user row and
//! the user's address list. Address completion talks to the geocoder, so it runs before
//! the transaction is opened and a slow or failing geocoder never holds a transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{address::AddressRepository, entity::EntityRepository, user::UserRepository},
    error::AppError,
    geocode::Geocoder,
    model::{
        location::Address,
        user::{CreateUserParam, User},
    },
    service::{address_list::AddressListService, location::LocationService},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    geocoder: &'a dyn Geocoder,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, geocoder: &'a dyn Geocoder) -> Self {
        Self { db, geocoder }
    }

    /// Creates a user together with its entity and address list.
    ///
    /// # Arguments
    /// - `param` - Entity and user fields
    /// - `addresses` - Address list in order; each must be completable
    ///
    /// # Returns
    /// - `Ok((User, Vec<Address>))` - The user and its stored addresses, carrying any
    ///   change records produced by completion
    /// - `Err(AppError::AddressCompletionErr)` - An address could not be completed; nothing written
    /// - `Err(AppError)` - A write failed; the transaction was rolled back
    pub async fn create_user(
        &self,
        param: CreateUserParam,
        mut addresses: Vec<Address>,
    ) -> Result<(User, Vec<Address>), AppError> {
        LocationService::new(self.geocoder)
            .complete_addresses(&mut addresses)
            .await?;

        let txn = self.db.begin().await?;

        let entity = EntityRepository::new(&txn)
            .create(param.entity_param())
            .await?;
        let user = UserRepository::new(&txn).create(entity.id, &param).await?;
        AddressListService::new(&txn)
            .create_address_list(entity.id, &mut addresses)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created user {} with {} address(es)",
            entity.pub_id,
            addresses.len()
        );

        Ok((User::from_entity(entity, user), addresses))
    }

    /// Gets a user and its address list by public id.
    ///
    /// # Returns
    /// - `Ok(Some((User, Vec<Address>)))` - User found
    /// - `Ok(None)` - No user with that public id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_user(&self, pub_id: &str) -> Result<Option<(User, Vec<Address>)>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_pub_id(pub_id).await? else {
            return Ok(None);
        };

        let addresses = AddressRepository::new(self.db)
            .get_by_owner_pub_id(pub_id)
            .await?;

        Ok(Some((user, addresses)))
    }
}
