use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::{info, instrument};

use models::{author, book, book_author};

use crate::domain::{AuthorInput, AuthorWithBooks};
use crate::errors::ServiceError;

#[derive(Clone)]
pub struct AuthorsService {
    db: DatabaseConnection,
}

impl AuthorsService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    #[instrument(skip(self, input))]
    pub async fn add(&self, input: AuthorInput) -> Result<author::Model, ServiceError> {
        author::validate_names(&input.first_name, &input.last_name).map_err(ServiceError::from_validation)?;
        let created = author::create(&self.db, &input.first_name, &input.last_name).await?;
        info!(author_id = created.id, "author_created");
        Ok(created)
    }

    /// All authors ordered by last name, then first name.
    pub async fn list(&self) -> Result<Vec<author::Model>, ServiceError> {
        let rows = author::Entity::find()
            .order_by_asc(author::Column::LastName)
            .order_by_asc(author::Column::FirstName)
            .order_by_asc(author::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<author::Model>, ServiceError> {
        Ok(author::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get_with_books(&self, id: i32) -> Result<Option<AuthorWithBooks>, ServiceError> {
        let Some(found) = author::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let book_titles = found
            .find_related(book::Entity)
            .order_by_asc(book::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|b| b.title)
            .collect();
        Ok(Some(AuthorWithBooks { full_name: found.full_name(), book_titles }))
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = author::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Err(ServiceError::missing_id("author", id));
        };
        book_author::Entity::delete_many()
            .filter(book_author::Column::AuthorId.eq(id))
            .exec(&txn)
            .await?;
        found.delete(&txn).await?;
        txn.commit().await?;
        info!(author_id = id, "author_deleted");
        Ok(())
    }
}
