use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entities::Table)
                    .if_not_exists()
                    .col(pk_auto(Entities::Id))
                    .col(string_uniq(Entities::PubId))
                    .col(integer_null(Entities::OwnerId))
                    .col(boolean(Entities::PubliclyReadable).default(false))
                    .col(
                        timestamp_with_time_zone(Entities::LastUpdated)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entities_owner_id")
                            .from(Entities::Table, Entities::OwnerId)
                            .to(Entities::Table, Entities::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Entities {
    Table,
    Id,
    PubId,
    OwnerId,
    PubliclyReadable,
    LastUpdated,
}
