use crate::server::data::address::AddressRepository;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use test_utils::{builder::TestBuilder, factory};

mod get_by_owner_pub_id;

async fn links_of(
    db: &sea_orm::DatabaseConnection,
    entity_id: i32,
) -> Result<Vec<entity::entity_address::Model>, DbErr> {
    entity::prelude::EntityAddress::find()
        .filter(entity::entity_address::Column::EntityId.eq(entity_id))
        .order_by_asc(entity::entity_address::Column::Idx)
        .all(db)
        .await
}
