//! HTTP error type — the only place errors become status codes.
//!
//! Client errors (400/404) carry their message to the caller. Datastore
//! failures are logged in full and surface as a generic 500 naming only
//! the action that failed.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use db::DbError;
use domain::DomainError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Path identifier is not a well-formed ObjectId.
    #[error("Invalid job ID format")]
    InvalidId(String),

    /// Request body is not JSON, or not sent as JSON.
    #[error("{0}")]
    InvalidBody(String),

    #[error("All fields are required")]
    MissingField(&'static str),

    #[error("Job not found")]
    NotFound,

    /// Any other datastore failure. `action` is the client-facing message.
    #[error("{action}")]
    Datastore {
        action: &'static str,
        #[source]
        source: DbError,
    },
}

impl ApiError {
    /// Map a repository error for the given action, keeping `NotFound` as 404.
    pub fn datastore(action: &'static str) -> impl FnOnce(DbError) -> ApiError {
        move |e| match e {
            DbError::NotFound => ApiError::NotFound,
            source => ApiError::Datastore { action, source },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) | ApiError::InvalidBody(_) | ApiError::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Datastore { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidId(raw) => ApiError::InvalidId(raw),
            DomainError::MissingField(field) => ApiError::MissingField(field),
        }
    }
}

impl From<JsonRejection> for ApiError {
    /// A body not sent as JSON is read as an empty payload, so it fails the
    /// required-field check. Unparseable JSON keeps the extractor's message.
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::MissingField("title"),
            other => ApiError::InvalidBody(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Datastore { action, source } => error!(error = %source, "{action}"),
            ApiError::InvalidId(raw) => warn!(id = %raw, "rejected malformed job id"),
            ApiError::MissingField(field) => warn!(field, "rejected incomplete job payload"),
            ApiError::InvalidBody(msg) => warn!("rejected request body: {msg}"),
            ApiError::NotFound => warn!("job not found"),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_from_repository_stays_404() {
        let err = ApiError::datastore("Failed to fetch job")(DbError::NotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Job not found");
    }

    #[test]
    fn datastore_failure_hides_details() {
        let err = ApiError::datastore("Failed to add job")(DbError::Unavailable(
            "socket closed at 10.0.0.7".into(),
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to add job");
    }

    #[test]
    fn domain_errors_are_bad_requests() {
        let invalid: ApiError = DomainError::InvalidId("nope".into()).into();
        let missing: ApiError = DomainError::MissingField("title").into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.to_string(), "All fields are required");
    }
}
