use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct PublisherDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
pub struct PublisherInputDoc { pub name: String }

#[derive(ToSchema)]
pub struct BookAuthorsDoc { pub book_name: String, pub book_authors: Vec<String> }

#[derive(ToSchema)]
pub struct PublisherWithBooksAndAuthorsDoc { pub name: String, pub book_authors: Vec<BookAuthorsDoc> }

#[derive(ToSchema)]
pub struct BookDoc {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub is_read: bool,
    /// RFC 3339 timestamp
    pub date_read: Option<String>,
    pub rate: Option<i32>,
    pub genre: String,
    pub cover_url: String,
    pub date_added: String,
    pub publisher_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct BookInputDoc {
    pub title: String,
    pub description: Option<String>,
    pub is_read: Option<bool>,
    pub date_read: Option<String>,
    pub rate: Option<i32>,
    pub genre: Option<String>,
    pub cover_url: Option<String>,
    pub publisher_id: Option<i32>,
    pub author_ids: Option<Vec<i32>>,
}

#[derive(ToSchema)]
pub struct BookWithAuthorsDoc {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub is_read: bool,
    pub date_read: Option<String>,
    pub rate: Option<i32>,
    pub genre: String,
    pub cover_url: String,
    pub date_added: String,
    pub publisher_name: Option<String>,
    pub author_names: Vec<String>,
}

#[derive(ToSchema)]
pub struct AuthorDoc { pub id: i32, pub first_name: String, pub last_name: String }

#[derive(ToSchema)]
pub struct AuthorInputDoc { pub first_name: String, pub last_name: String }

#[derive(ToSchema)]
pub struct AuthorWithBooksDoc { pub full_name: String, pub book_titles: Vec<String> }

#[derive(ToSchema)]
pub struct LogDoc { pub id: i32, pub message: String, pub level: String, pub timestamp: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::publishers::list,
        crate::routes::publishers::get,
        crate::routes::publishers::books_with_authors,
        crate::routes::publishers::create,
        crate::routes::publishers::delete,
        crate::routes::books::list,
        crate::routes::books::get,
        crate::routes::books::create,
        crate::routes::books::update,
        crate::routes::books::delete,
        crate::routes::authors::list,
        crate::routes::authors::get,
        crate::routes::authors::books,
        crate::routes::authors::create,
        crate::routes::authors::delete,
        crate::routes::logs::get_all_from_db,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            PublisherDoc,
            PublisherInputDoc,
            BookAuthorsDoc,
            PublisherWithBooksAndAuthorsDoc,
            BookDoc,
            BookInputDoc,
            BookWithAuthorsDoc,
            AuthorDoc,
            AuthorInputDoc,
            AuthorWithBooksDoc,
            LogDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "publishers"),
        (name = "books"),
        (name = "authors"),
        (name = "logs")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in [
            "/health",
            "/api/publishers",
            "/api/publishers/{id}",
            "/api/publishers/{id}/books-with-authors",
            "/api/books",
            "/api/books/{id}",
            "/api/authors",
            "/api/authors/{id}",
            "/api/authors/{id}/books",
            "/api/logs/get-all-logs-from-db",
        ] {
            assert!(paths.contains(&p), "missing {p}");
        }
    }
}
