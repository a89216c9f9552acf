use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use super::models::StatusResponse;
use crate::errors::{LookupError, ServiceError};
use crate::validation::Violation;

/// Failure of a handler, rendered as `{"status": 0, "message": ...}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(Violation),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("{context}: {cause:#}")]
    Storage {
        context: &'static str,
        cause: anyhow::Error,
    },

    #[error("No team results available yet.")]
    NoResults,
}

impl ApiError {
    pub fn storage(context: &'static str, cause: anyhow::Error) -> Self {
        ApiError::Storage { context, cause }
    }

    pub fn from_service(err: ServiceError, context: &'static str) -> Self {
        match err {
            ServiceError::Lookup(lookup) => ApiError::Lookup(lookup),
            ServiceError::Storage(cause) => ApiError::storage(context, cause),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::Lookup(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NoResults => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Storage { context, cause } => {
                log::error!("{}: {:?}", context, cause);
                context.to_string()
            }
            other => other.to_string(),
        };

        (self.status_code(), Json(StatusResponse::failure(message))).into_response()
    }
}
