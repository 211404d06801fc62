//! Ordered, labelled link between an owning entity and a location.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "entity_addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub entity_id: i32,
    pub location_id: i32,
    pub idx: i32,
    pub label: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::base_entity::Entity",
        from = "Column::EntityId",
        to = "super::base_entity::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BaseEntity,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Location,
}

impl Related<super::base_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BaseEntity.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
