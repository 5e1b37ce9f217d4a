use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{book, book_author, errors::ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { BookAuthors }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::BookAuthors => Entity::has_many(book_author::Entity).into() }
    }
}

impl Related<book_author::Entity> for Entity {
    fn to() -> RelationDef { Relation::BookAuthors.def() }
}

impl Related<book::Entity> for Entity {
    fn to() -> RelationDef { book_author::Relation::Book.def() }
    fn via() -> Option<RelationDef> { Some(book_author::Relation::Author.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_names(first_name: &str, last_name: &str) -> Result<(), ModelError> {
    if first_name.trim().is_empty() { return Err(ModelError::Validation("First name is required".into())); }
    if last_name.trim().is_empty() { return Err(ModelError::Validation("Last name is required".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, first_name: &str, last_name: &str) -> Result<Model, ModelError> {
    validate_names(first_name, last_name)?;
    let am = ActiveModel {
        first_name: Set(first_name.trim().to_string()),
        last_name: Set(last_name.trim().to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
