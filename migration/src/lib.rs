pub use sea_orm_migration::prelude::*;

mod m20190301_000001_create_entity_table;
mod m20190301_000002_create_user_table;
mod m20190301_000003_create_location_table;
mod m20190301_000004_create_entity_address_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20190301_000001_create_entity_table::Migration),
            Box::new(m20190301_000002_create_user_table::Migration),
            Box::new(m20190301_000003_create_location_table::Migration),
            Box::new(m20190301_000004_create_entity_address_table::Migration),
        ]
    }
}
