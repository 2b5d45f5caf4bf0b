//! Error types

use crate::models::{ErrorResponse, TicketId};
use crate::validation::ValidationFailure;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Ticket service error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketError {
    /// No ticket has this id
    #[error("ticket not found: {0}")]
    NotFound(TicketId),
}

/// Result type for the ticket service
pub type TicketResult<T> = Result<T, TicketError>;

/// Body of a 400 response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Failures in rule order
    pub errors: Vec<ValidationFailure>,
}

/// Errors surfaced at the HTTP boundary
#[derive(Error, Debug)]
pub enum ApiError {
    /// Service-level failure
    #[error(transparent)]
    Ticket(#[from] TicketError),

    /// Request body failed validation
    #[error("request rejected by {} validation rule(s)", .0.len())]
    Validation(Vec<ValidationFailure>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Ticket(err @ TicketError::NotFound(_)) => {
                tracing::debug!(%err, "ticket lookup missed");
                let body = ErrorResponse {
                    code: "not_found".into(),
                    message: err.to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::Validation(errors) => {
                tracing::debug!(?errors, "ticket request rejected");
                (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { errors })).into_response()
            }
        }
    }
}
