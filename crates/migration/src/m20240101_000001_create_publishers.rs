//! Create `publishers` table.
//!
//! Books reference it through a nullable foreign key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publishers::Table)
                    .if_not_exists()
                    .col(pk_auto(Publishers::Id))
                    .col(string_len(Publishers::Name, 256).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Publishers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Publishers { Table, Id, Name }
