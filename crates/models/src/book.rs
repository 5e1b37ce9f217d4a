use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{author, book_author, errors::ModelError, publisher};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub is_read: bool,
    pub date_read: Option<DateTimeWithTimeZone>,
    pub rate: Option<i32>,
    pub genre: String,
    pub cover_url: String,
    pub date_added: DateTimeWithTimeZone,
    pub publisher_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Publisher, BookAuthors }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Publisher => Entity::belongs_to(publisher::Entity)
                .from(Column::PublisherId)
                .to(publisher::Column::Id)
                .into(),
            Relation::BookAuthors => Entity::has_many(book_author::Entity).into(),
        }
    }
}

impl Related<publisher::Entity> for Entity {
    fn to() -> RelationDef { Relation::Publisher.def() }
}

impl Related<book_author::Entity> for Entity {
    fn to() -> RelationDef { Relation::BookAuthors.def() }
}

impl Related<author::Entity> for Entity {
    fn to() -> RelationDef { book_author::Relation::Author.def() }
    fn via() -> Option<RelationDef> { Some(book_author::Relation::Book.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("Title is required".into()));
    }
    Ok(())
}

/// A read date only makes sense for a book that has been read.
pub fn normalize_date_read(is_read: bool, date_read: Option<DateTimeWithTimeZone>) -> Option<DateTimeWithTimeZone> {
    if is_read { date_read } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_books_drop_the_read_date() {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        assert_eq!(normalize_date_read(false, Some(now)), None);
        assert_eq!(normalize_date_read(true, Some(now)), Some(now));
        assert_eq!(normalize_date_read(true, None), None);
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(validate_title("   ").is_err());
        assert!(validate_title("Dune").is_ok());
    }
}
