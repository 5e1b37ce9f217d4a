use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::publisher;

use crate::domain::{PublisherInput, PublisherWithBooksAndAuthors};
use crate::errors::ServiceError;
use crate::publishers::repository::PublisherRepository;
use crate::query::ListQuery;

/// Sort key that flips publisher listing to name-descending.
pub const NAME_DESC: &str = "name_desc";

/// Application service encapsulating publisher business rules.
pub struct PublishersService<R: PublisherRepository> {
    repo: Arc<R>,
}

impl<R: PublisherRepository> PublishersService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Search, sort and page publishers. Out-of-range pages are empty, never an error.
    ///
    /// # Examples
    /// ```
    /// use service::publishers::{repository::mock::MockPublisherRepository, PublishersService};
    /// use models::publisher;
    /// use std::sync::Arc;
    /// let rows = (1..=6).map(|i| publisher::Model { id: i, name: format!("Publisher {}", i) }).collect();
    /// let svc = PublishersService::new(Arc::new(MockPublisherRepository::with_rows(rows)));
    /// let page = tokio_test::block_on(svc.list(Some("name_desc"), Some("Publisher"), Some(2))).unwrap();
    /// assert_eq!(page.len(), 1);
    /// assert_eq!(page[0].name, "Publisher 1");
    /// ```
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        sort_by: Option<&str>,
        search: Option<&str>,
        page_index: Option<u64>,
    ) -> Result<Vec<publisher::Model>, ServiceError> {
        let query = ListQuery::new(sort_by, search, page_index, NAME_DESC);
        self.repo.list(&query).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<publisher::Model>, ServiceError> {
        self.repo.get(id).await
    }

    /// Validate and persist a new publisher.
    ///
    /// # Examples
    /// ```
    /// use service::publishers::{repository::mock::MockPublisherRepository, PublishersService};
    /// use service::{domain::PublisherInput, errors::ServiceError};
    /// use std::sync::Arc;
    /// let svc = PublishersService::new(Arc::new(MockPublisherRepository::default()));
    /// let created = tokio_test::block_on(svc.add(PublisherInput { name: "Orbit".into() })).unwrap();
    /// assert_eq!(created.id, 1);
    /// let err = tokio_test::block_on(svc.add(PublisherInput { name: "9 Lives".into() })).unwrap_err();
    /// assert!(matches!(err, ServiceError::Validation(_)));
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn add(&self, input: PublisherInput) -> Result<publisher::Model, ServiceError> {
        if let Err(e) = publisher::validate_name(&input.name) {
            warn!(error = %e, "publisher rejected");
            return Err(ServiceError::from_validation(e));
        }
        let created = self.repo.create(&input.name).await?;
        info!(publisher_id = created.id, "publisher_created");
        Ok(created)
    }

    pub async fn get_with_books_and_authors(&self, id: i32) -> Result<Option<PublisherWithBooksAndAuthors>, ServiceError> {
        self.repo.with_books_and_authors(id).await
    }

    /// Delete by id; a missing id is a domain error rather than a silent no-op.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::missing_id("publisher", id));
        }
        info!(publisher_id = id, "publisher_deleted");
        Ok(())
    }
}
