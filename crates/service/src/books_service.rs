use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, instrument, warn};

use models::{author, book, book_author, publisher};

use crate::domain::{BookInput, BookWithAuthors};
use crate::errors::ServiceError;
use crate::query::{ListQuery, PAGE_SIZE};

/// Sort key that flips book listing to title-descending.
pub const TITLE_DESC: &str = "title_desc";

#[derive(Clone)]
pub struct BooksService {
    db: DatabaseConnection,
}

impl BooksService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Search, sort and page books by title.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        sort_by: Option<&str>,
        search: Option<&str>,
        page_index: Option<u64>,
    ) -> Result<Vec<book::Model>, ServiceError> {
        let query = ListQuery::new(sort_by, search, page_index, TITLE_DESC);
        if query.offset().is_none() {
            return Ok(Vec::new());
        }
        let rows = query
            .apply_to_select(book::Entity::find(), book::Column::Title, book::Column::Id)
            .paginate(&self.db, PAGE_SIZE)
            .fetch_page(query.page_index0())
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<BookWithAuthors>, ServiceError> {
        let Some(found) = book::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let publisher_name = found
            .find_related(publisher::Entity)
            .one(&self.db)
            .await?
            .map(|p| p.name);
        let author_names = found
            .find_related(author::Entity)
            .order_by_asc(author::Column::Id)
            .all(&self.db)
            .await?
            .iter()
            .map(author::Model::full_name)
            .collect();
        Ok(Some(BookWithAuthors {
            id: found.id,
            title: found.title,
            description: found.description,
            is_read: found.is_read,
            date_read: found.date_read,
            rate: found.rate,
            genre: found.genre,
            cover_url: found.cover_url,
            date_added: found.date_added,
            publisher_name,
            author_names,
        }))
    }

    /// Validate references and insert the book with its author links in one transaction.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn add(&self, input: BookInput) -> Result<book::Model, ServiceError> {
        book::validate_title(&input.title).map_err(ServiceError::from_validation)?;
        let txn = self.db.begin().await?;
        let author_ids = ensure_references(&txn, input.publisher_id, &input.author_ids).await?;

        let created = book::ActiveModel {
            title: Set(input.title.trim().to_string()),
            description: Set(input.description),
            is_read: Set(input.is_read),
            date_read: Set(book::normalize_date_read(input.is_read, input.date_read)),
            rate: Set(input.rate),
            genre: Set(input.genre),
            cover_url: Set(input.cover_url),
            date_added: Set(Utc::now().into()),
            publisher_id: Set(input.publisher_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        link_authors(&txn, created.id, &author_ids).await?;
        txn.commit().await?;

        info!(book_id = created.id, authors = author_ids.len(), "book_created");
        Ok(created)
    }

    /// Replace every field and the author set of an existing book.
    #[instrument(skip(self, input))]
    pub async fn update_by_id(&self, id: i32, input: BookInput) -> Result<book::Model, ServiceError> {
        book::validate_title(&input.title).map_err(ServiceError::from_validation)?;
        let txn = self.db.begin().await?;
        let mut am: book::ActiveModel = book::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("book"))?
            .into();
        let author_ids = ensure_references(&txn, input.publisher_id, &input.author_ids).await?;

        am.title = Set(input.title.trim().to_string());
        am.description = Set(input.description);
        am.is_read = Set(input.is_read);
        am.date_read = Set(book::normalize_date_read(input.is_read, input.date_read));
        am.rate = Set(input.rate);
        am.genre = Set(input.genre);
        am.cover_url = Set(input.cover_url);
        am.publisher_id = Set(input.publisher_id);
        let updated = am.update(&txn).await?;

        book_author::Entity::delete_many()
            .filter(book_author::Column::BookId.eq(id))
            .exec(&txn)
            .await?;
        link_authors(&txn, id, &author_ids).await?;
        txn.commit().await?;

        info!(book_id = id, "book_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = book::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Err(ServiceError::missing_id("book", id));
        };
        book_author::Entity::delete_many()
            .filter(book_author::Column::BookId.eq(id))
            .exec(&txn)
            .await?;
        found.delete(&txn).await?;
        txn.commit().await?;
        info!(book_id = id, "book_deleted");
        Ok(())
    }
}

/// Check the optional publisher and every author exist. Returns the author ids deduplicated.
async fn ensure_references<C: ConnectionTrait>(
    conn: &C,
    publisher_id: Option<i32>,
    author_ids: &[i32],
) -> Result<Vec<i32>, ServiceError> {
    if let Some(pid) = publisher_id {
        if publisher::Entity::find_by_id(pid).one(conn).await?.is_none() {
            warn!(publisher_id = pid, "book references a missing publisher");
            return Err(ServiceError::missing_id("publisher", pid));
        }
    }
    let wanted: BTreeSet<i32> = author_ids.iter().copied().collect();
    if wanted.is_empty() {
        return Ok(Vec::new());
    }
    let found: BTreeSet<i32> = author::Entity::find()
        .filter(author::Column::Id.is_in(wanted.iter().copied()))
        .all(conn)
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();
    if let Some(missing) = wanted.difference(&found).next() {
        warn!(author_id = *missing, "book references a missing author");
        return Err(ServiceError::missing_id("author", *missing));
    }
    Ok(wanted.into_iter().collect())
}

async fn link_authors<C: ConnectionTrait>(conn: &C, book_id: i32, author_ids: &[i32]) -> Result<(), ServiceError> {
    if author_ids.is_empty() {
        return Ok(());
    }
    let rows = author_ids.iter().map(|&author_id| book_author::ActiveModel {
        book_id: Set(book_id),
        author_id: Set(author_id),
    });
    book_author::Entity::insert_many(rows).exec_without_returning(conn).await?;
    Ok(())
}
