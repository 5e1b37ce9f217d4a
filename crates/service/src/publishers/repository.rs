use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::debug;

use models::{author, book, publisher};

use crate::domain::{BookAuthors, PublisherWithBooksAndAuthors};
use crate::errors::ServiceError;
use crate::query::{ListQuery, PAGE_SIZE};

/// Persistence operations the publishers service relies on.
#[async_trait]
pub trait PublisherRepository: Send + Sync {
    /// One page of publishers, filtered and sorted per `query`.
    async fn list(&self, query: &ListQuery) -> Result<Vec<publisher::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<publisher::Model>, ServiceError>;
    /// Persist an already validated name.
    async fn create(&self, name: &str) -> Result<publisher::Model, ServiceError>;
    /// Returns false when no publisher has this id.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn with_books_and_authors(&self, id: i32) -> Result<Option<PublisherWithBooksAndAuthors>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmPublisherRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PublisherRepository for SeaOrmPublisherRepository {
    async fn list(&self, query: &ListQuery) -> Result<Vec<publisher::Model>, ServiceError> {
        if query.offset().is_none() {
            return Ok(Vec::new());
        }
        let select = query.apply_to_select(publisher::Entity::find(), publisher::Column::Name, publisher::Column::Id);
        let rows = select
            .paginate(&self.db, PAGE_SIZE)
            .fetch_page(query.page_index0())
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<publisher::Model>, ServiceError> {
        Ok(publisher::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(&self, name: &str) -> Result<publisher::Model, ServiceError> {
        Ok(publisher::create(&self.db, name).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = publisher::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(false);
        };
        // books outlive their publisher
        let detached = book::Entity::update_many()
            .col_expr(book::Column::PublisherId, Expr::value(Option::<i32>::None))
            .filter(book::Column::PublisherId.eq(id))
            .exec(&txn)
            .await?;
        found.delete(&txn).await?;
        txn.commit().await?;
        debug!(publisher_id = id, detached_books = detached.rows_affected, "publisher deleted");
        Ok(true)
    }

    async fn with_books_and_authors(&self, id: i32) -> Result<Option<PublisherWithBooksAndAuthors>, ServiceError> {
        let Some(found) = publisher::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let books = found
            .find_related(book::Entity)
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await?;
        let mut book_authors = Vec::with_capacity(books.len());
        for b in books {
            let authors = b
                .find_related(author::Entity)
                .order_by_asc(author::Column::Id)
                .all(&self.db)
                .await?;
            book_authors.push(BookAuthors {
                book_name: b.title,
                book_authors: authors.iter().map(author::Model::full_name).collect(),
            });
        }
        Ok(Some(PublisherWithBooksAndAuthors { name: found.name, book_authors }))
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockPublisherRepository {
        rows: Mutex<Vec<publisher::Model>>,
    }

    impl MockPublisherRepository {
        /// Pre-populate with rows whose ids are kept as given.
        pub fn with_rows(rows: Vec<publisher::Model>) -> Self {
            Self { rows: Mutex::new(rows) }
        }

        fn rows(&self) -> Result<MutexGuard<'_, Vec<publisher::Model>>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("mock repository poisoned".into()))
        }
    }

    #[async_trait]
    impl PublisherRepository for MockPublisherRepository {
        async fn list(&self, query: &ListQuery) -> Result<Vec<publisher::Model>, ServiceError> {
            let rows = self.rows()?;
            Ok(query.apply(rows.iter().cloned()))
        }

        async fn get(&self, id: i32) -> Result<Option<publisher::Model>, ServiceError> {
            Ok(self.rows()?.iter().find(|p| p.id == id).cloned())
        }

        async fn create(&self, name: &str) -> Result<publisher::Model, ServiceError> {
            let mut rows = self.rows()?;
            let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let created = publisher::Model { id, name: name.to_string() };
            rows.push(created.clone());
            Ok(created)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut rows = self.rows()?;
            let before = rows.len();
            rows.retain(|p| p.id != id);
            Ok(rows.len() != before)
        }

        async fn with_books_and_authors(&self, id: i32) -> Result<Option<PublisherWithBooksAndAuthors>, ServiceError> {
            Ok(self
                .rows()?
                .iter()
                .find(|p| p.id == id)
                .map(|p| PublisherWithBooksAndAuthors { name: p.name.clone(), book_authors: Vec::new() }))
        }
    }
}
