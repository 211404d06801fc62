use sea_orm_migration::{prelude::*, schema::*};

use super::m20190301_000001_create_entity_table::Entities;
use super::m20190301_000003_create_location_table::Locations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EntityAddresses::Table)
                    .if_not_exists()
                    .col(pk_auto(EntityAddresses::Id))
                    .col(integer(EntityAddresses::EntityId))
                    .col(integer(EntityAddresses::LocationId))
                    .col(integer(EntityAddresses::Idx))
                    .col(string_null(EntityAddresses::Label))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entity_addresses_entity_id")
                            .from(EntityAddresses::Table, EntityAddresses::EntityId)
                            .to(Entities::Table, Entities::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entity_addresses_location_id")
                            .from(EntityAddresses::Table, EntityAddresses::LocationId)
                            .to(Locations::Table, Locations::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_entity_addresses_entity_id_idx")
                    .table(EntityAddresses::Table)
                    .col(EntityAddresses::EntityId)
                    .col(EntityAddresses::Idx)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EntityAddresses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EntityAddresses {
    Table,
    Id,
    EntityId,
    LocationId,
    Idx,
    Label,
}
