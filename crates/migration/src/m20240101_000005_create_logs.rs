//! Create `logs` table.
//!
//! Filled by the application's log writer; exposed read-only over HTTP.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Logs::Table)
                    .if_not_exists()
                    .col(pk_auto(Logs::Id))
                    .col(text(Logs::Message).not_null())
                    .col(string_len(Logs::Level, 16).not_null())
                    .col(timestamp_with_time_zone(Logs::Timestamp).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Logs::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Logs { Table, Id, Message, Level, Timestamp }
