use actix_web::http::StatusCode;
use thiserror::Error;

/// Failure classes surfaced by the service layer. Each maps to exactly one
/// HTTP status; nothing is retried or recovered internally.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),
}

impl ServiceError {
    /// Conflicts surface as 400, matching the "Email already registered"
    /// responses of the public contract.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Conflict(_) | ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Database(_) | ServiceError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
