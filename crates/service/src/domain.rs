use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

/// Input for creating a publisher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherInput {
    pub name: String,
}

/// Input for creating an author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorInput {
    pub first_name: String,
    pub last_name: String,
}

/// Input for creating or replacing a book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub date_read: Option<DateTimeWithTimeZone>,
    #[serde(default)]
    pub rate: Option<i32>,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub publisher_id: Option<i32>,
    #[serde(default)]
    pub author_ids: Vec<i32>,
}

/// Book with its publisher and author names resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookWithAuthors {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub is_read: bool,
    pub date_read: Option<DateTimeWithTimeZone>,
    pub rate: Option<i32>,
    pub genre: String,
    pub cover_url: String,
    pub date_added: DateTimeWithTimeZone,
    pub publisher_name: Option<String>,
    pub author_names: Vec<String>,
}

/// Author with the titles of the books they wrote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthorWithBooks {
    pub full_name: String,
    pub book_titles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookAuthors {
    pub book_name: String,
    pub book_authors: Vec<String>,
}

/// Publisher with every book it published and each book's authors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublisherWithBooksAndAuthors {
    pub name: String,
    pub book_authors: Vec<BookAuthors>,
}
