use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(pk_auto(Locations::Id))
                    .col(string(Locations::Address1))
                    .col(string_null(Locations::Address2))
                    .col(string(Locations::City))
                    .col(string(Locations::State))
                    .col(string(Locations::Zip))
                    .col(double(Locations::Lat))
                    .col(double(Locations::Lng))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Locations {
    Table,
    Id,
    Address1,
    Address2,
    City,
    State,
    Zip,
    Lat,
    Lng,
}
