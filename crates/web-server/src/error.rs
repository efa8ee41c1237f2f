use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::DbError;
use forms::FormErrors;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
    /// A write failed and was rolled back; `message` is what the user sees.
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: DbError,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] FormErrors),
    #[error("Not found: {0}")]
    NotFound(String),
    /// The request was refused by an extractor before reaching a handler.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    /// Wraps a failed write with a user-facing message.
    ///
    /// Not-found and referential errors keep their own status codes; only
    /// genuine persistence failures are replaced by `message`.
    pub fn persistence(message: impl Into<String>) -> impl FnOnce(DbError) -> AppError {
        let message = message.into();
        move |err| match err {
            DbError::NotFound { .. } | DbError::InvalidReference { .. } | DbError::ReferencedBy { .. } => {
                AppError::Database(err)
            }
            source => AppError::Persistence { message, source },
        }
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Database(DbError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{entity} {id} was not found.") }),
            ),
            AppError::Database(DbError::InvalidReference { field, message }) => {
                tracing::warn!(field, %message, "Rejected show with an invalid reference.");
                (StatusCode::BAD_REQUEST, json!({ "error": message, "field": field }))
            }
            AppError::Database(err @ DbError::ReferencedBy { .. }) => {
                (StatusCode::CONFLICT, json!({ "error": err.to_string() }))
            }
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal database error occurred" }),
                )
            }
            AppError::Persistence { message, source } => {
                tracing::error!(error = ?source, %message, "Write rolled back.");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation failed", "details": errors.errors }),
            ),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "error": message })),
            AppError::Rejected { status, message } => (status, json!({ "error": message })),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_keeps_not_found() {
        let err = AppError::persistence("boom")(DbError::NotFound { entity: "Venue", id: 1 });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn persistence_masks_other_failures() {
        let err = AppError::persistence("An error occurred. Venue X could not be listed.")(
            DbError::ConnectionConfigError("pool closed".to_string()),
        );
        assert!(matches!(&err, AppError::Persistence { message, .. } if message.contains("Venue X")));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn status_codes() {
        let referenced = AppError::Database(DbError::ReferencedBy {
            entity: "Artist",
            name: "Band".to_string(),
            shows: 2,
        });
        assert_eq!(referenced.into_response().status(), StatusCode::CONFLICT);

        let invalid = AppError::Database(DbError::InvalidReference {
            field: "venue_id",
            message: "Venue ID not valid".to_string(),
        });
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let validation = AppError::Validation(FormErrors::single("city", "too short"));
        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
