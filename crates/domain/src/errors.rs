use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Entity not found: {entity}")]
    NotFound { entity: String },

    #[error("Uniqueness conflict: {field}")]
    Uniqueness { field: String },

    #[error("Forbidden action")]
    Forbidden,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {message}")]
    Repository { message: String },
}

impl Error {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
        }
    }

    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }
}
