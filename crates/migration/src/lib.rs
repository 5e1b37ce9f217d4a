//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_publishers;
mod m20240101_000002_create_authors;
mod m20240101_000003_create_books;
mod m20240101_000004_create_book_authors;
mod m20240101_000005_create_logs;
mod m20240101_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_publishers::Migration),
            Box::new(m20240101_000002_create_authors::Migration),
            Box::new(m20240101_000003_create_books::Migration),
            Box::new(m20240101_000004_create_book_authors::Migration),
            Box::new(m20240101_000005_create_logs::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000006_add_indexes::Migration),
        ]
    }
}
