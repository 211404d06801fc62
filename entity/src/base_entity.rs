//! Row shared by every owned resource (`entities` table).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub pub_id: String,
    pub owner_id: Option<i32>,
    pub publicly_readable: bool,
    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entity_address::Entity")]
    EntityAddress,
    #[sea_orm(has_one = "super::user::Entity")]
    User,
}

impl Related<super::entity_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntityAddress.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
