//! Factory for `locations` rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating complete test locations.
///
/// Defaults to Springfield, IL city hall.
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    entity: entity::location::Model,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory with default values.
    ///
    /// Defaults:
    /// - address1: `"1 Main St"`, address2: `None`
    /// - city / state / zip: `"Springfield"`, `"IL"`, `"62701"`
    /// - lat / lng: `39.7990`, `-89.6440`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            entity: entity::location::Model {
                id: 0,
                address1: "1 Main St".to_string(),
                address2: None,
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip: "62701".to_string(),
                lat: 39.7990,
                lng: -89.6440,
            },
        }
    }

    /// Inserts the row with a fixed id instead of an auto-incremented one.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn address1(mut self, address1: impl Into<String>) -> Self {
        self.entity.address1 = address1.into();
        self
    }

    pub fn address2(mut self, address2: Option<String>) -> Self {
        self.entity.address2 = address2;
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.entity.city = city.into();
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.entity.zip = zip.into();
        self
    }

    pub fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.entity.lat = lat;
        self.entity.lng = lng;
        self
    }

    /// Builds and inserts the location row.
    ///
    /// # Returns
    /// - `Ok(entity::location::Model)` - The created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            id: match self.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            address1: ActiveValue::Set(self.entity.address1),
            address2: ActiveValue::Set(self.entity.address2),
            city: ActiveValue::Set(self.entity.city),
            state: ActiveValue::Set(self.entity.state),
            zip: ActiveValue::Set(self.entity.zip),
            lat: ActiveValue::Set(self.entity.lat),
            lng: ActiveValue::Set(self.entity.lng),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location with default values.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}
