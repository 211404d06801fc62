use sea_orm_migration::{prelude::*, schema::*};

use super::m20190301_000001_create_entity_table::Entities;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(integer(Users::Id).primary_key())
                    .col(string_null(Users::AuthId))
                    .col(string_null(Users::LegalId))
                    .col(string_null(Users::LegalIdType))
                    .col(boolean(Users::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_entity_id")
                            .from(Users::Table, Users::Id)
                            .to(Entities::Table, Entities::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    AuthId,
    LegalId,
    LegalIdType,
    Active,
}
