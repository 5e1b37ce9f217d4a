use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{author, book};

/// Join row between a book and one of its authors.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book_authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub book_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub author_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Book, Author }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Book => Entity::belongs_to(book::Entity)
                .from(Column::BookId)
                .to(book::Column::Id)
                .into(),
            Relation::Author => Entity::belongs_to(author::Entity)
                .from(Column::AuthorId)
                .to(author::Column::Id)
                .into(),
        }
    }
}

impl Related<book::Entity> for Entity {
    fn to() -> RelationDef { Relation::Book.def() }
}

impl Related<author::Entity> for Entity {
    fn to() -> RelationDef { Relation::Author.def() }
}

impl ActiveModelBehavior for ActiveModel {}
