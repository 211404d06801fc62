use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Same value as the owning `entities.id`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub auth_id: Option<String>,
    pub legal_id: Option<String>,
    pub legal_id_type: Option<String>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::base_entity::Entity",
        from = "Column::Id",
        to = "super::base_entity::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BaseEntity,
}

impl Related<super::base_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BaseEntity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
