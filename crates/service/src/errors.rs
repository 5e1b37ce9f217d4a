use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The request was well formed but cannot be applied to the current state,
    /// e.g. deleting an id that does not exist or referencing a missing row.
    #[error("{0}")]
    Operation(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn missing_id(entity: &str, id: i32) -> Self {
        Self::Operation(format!("The {} with id: {} does not exist", entity, id))
    }

    /// Lift a model-level rule violation into a plain validation error.
    pub fn from_validation(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => Self::Validation(msg),
            other => Self::Model(other),
        }
    }

    /// Message safe to hand back to a client; `None` for infrastructure failures.
    pub fn client_message(&self) -> Option<String> {
        match self {
            ServiceError::Validation(msg) | ServiceError::Operation(msg) => Some(msg.clone()),
            ServiceError::Model(models::errors::ModelError::Validation(msg)) => Some(msg.clone()),
            ServiceError::NotFound(msg) => Some(msg.clone()),
            ServiceError::Db(_) | ServiceError::Model(models::errors::ModelError::Db(_)) => None,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
