use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error as ThisError;
use tracing::error;

/// Service-level error taxonomy.
///
/// Every handler returns `Result<_, RosterError>`; the `IntoResponse` impl
/// is the single place status codes and wire bodies are decided. Bodies are
/// plain-text single lines. Storage failures surface to clients as a fixed
/// generic message while the underlying error is logged server-side.
#[derive(Debug, ThisError)]
pub enum RosterError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Person not found")]
    PersonNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for RosterError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            RosterError::InvalidInput => (StatusCode::BAD_REQUEST, "Invalid input"),
            RosterError::CourseNotFound => (StatusCode::NOT_FOUND, "Course not found"),
            RosterError::PersonNotFound => (StatusCode::NOT_FOUND, "Person not found"),
            RosterError::Database(ref e) => {
                error!(error = %e, "storage operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };
        (status, body).into_response()
    }
}
