use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Publishers: listing sorts and filters by name
        manager
            .create_index(
                Index::create()
                    .name("idx_publishers_name")
                    .table(Publishers::Table)
                    .col(Publishers::Name)
                    .to_owned(),
            )
            .await?;

        // Books: listing sorts by title; publisher views join on publisher_id
        manager
            .create_index(
                Index::create()
                    .name("idx_books_title")
                    .table(Books::Table)
                    .col(Books::Title)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_books_publisher")
                    .table(Books::Table)
                    .col(Books::PublisherId)
                    .to_owned(),
            )
            .await?;

        // BookAuthors: the primary key covers book_id lookups, author side needs its own
        manager
            .create_index(
                Index::create()
                    .name("idx_book_authors_author")
                    .table(BookAuthors::Table)
                    .col(BookAuthors::AuthorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_book_authors_author").table(BookAuthors::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_books_publisher").table(Books::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_books_title").table(Books::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_publishers_name").table(Publishers::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Publishers { Table, Name }

#[derive(DeriveIden)]
enum Books { Table, Title, PublisherId }

#[derive(DeriveIden)]
enum BookAuthors { Table, AuthorId }
