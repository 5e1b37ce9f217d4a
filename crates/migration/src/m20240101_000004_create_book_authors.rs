//! Create `book_authors` join table between `books` and `authors`.
//!
//! Composite primary key; rows go away with either side.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookAuthors::Table)
                    .if_not_exists()
                    .col(integer(BookAuthors::BookId).not_null())
                    .col(integer(BookAuthors::AuthorId).not_null())
                    .primary_key(
                        Index::create()
                            .col(BookAuthors::BookId)
                            .col(BookAuthors::AuthorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_authors_book")
                            .from(BookAuthors::Table, BookAuthors::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_authors_author")
                            .from(BookAuthors::Table, BookAuthors::AuthorId)
                            .to(Authors::Table, Authors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BookAuthors::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BookAuthors { Table, BookId, AuthorId }

#[derive(DeriveIden)]
enum Books { Table, Id }

#[derive(DeriveIden)]
enum Authors { Table, Id }
