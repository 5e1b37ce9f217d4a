use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    authors_service::AuthorsService,
    books_service::BooksService,
    logs_service::LogsService,
    publishers::{repository::SeaOrmPublisherRepository, PublishersService},
};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub publishers: Arc<PublishersService<SeaOrmPublisherRepository>>,
    pub books: Arc<BooksService>,
    pub authors: Arc<AuthorsService>,
    pub logs: Arc<LogsService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = SeaOrmPublisherRepository { db: db.clone() };
        Self {
            publishers: Arc::new(PublishersService::new(Arc::new(repo))),
            books: Arc::new(BooksService::new(db.clone())),
            authors: Arc::new(AuthorsService::new(db.clone())),
            logs: Arc::new(LogsService::new(db)),
        }
    }
}
