//! Persisted locations. Only complete locations are ever written, so every
//! column other than `address2` is non-null.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[sea_orm(column_type = "Double")]
    pub lat: f64,
    #[sea_orm(column_type = "Double")]
    pub lng: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entity_address::Entity")]
    EntityAddress,
}

impl Related<super::entity_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntityAddress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
