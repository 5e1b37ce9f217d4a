use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{book, errors::ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "publishers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Books }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Books => Entity::has_many(book::Entity).into() }
    }
}

impl Related<book::Entity> for Entity {
    fn to() -> RelationDef { Relation::Books.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Publisher names are required and must not start with a digit.
pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("Name is required".into()));
    }
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return Err(ModelError::Validation("Name cannot start with a number".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
