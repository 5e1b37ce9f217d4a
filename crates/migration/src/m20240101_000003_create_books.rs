//! Create `books` table with an optional FK to `publishers`.
//!
//! Deleting a publisher nulls `publisher_id` instead of removing its books.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(pk_auto(Books::Id))
                    .col(string_len(Books::Title, 256).not_null())
                    .col(text(Books::Description).not_null())
                    .col(boolean(Books::IsRead).not_null())
                    .col(timestamp_with_time_zone_null(Books::DateRead))
                    .col(integer_null(Books::Rate))
                    .col(string_len(Books::Genre, 128).not_null())
                    .col(string_len(Books::CoverUrl, 512).not_null())
                    .col(timestamp_with_time_zone(Books::DateAdded).not_null())
                    .col(integer_null(Books::PublisherId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_books_publisher")
                            .from(Books::Table, Books::PublisherId)
                            .to(Publishers::Table, Publishers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Books::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Books {
    Table,
    Id,
    Title,
    Description,
    IsRead,
    DateRead,
    Rate,
    Genre,
    CoverUrl,
    DateAdded,
    PublisherId,
}

#[derive(DeriveIden)]
enum Publishers { Table, Id }
