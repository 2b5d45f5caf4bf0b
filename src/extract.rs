//! Request extractors

use crate::error::ApiError;
use crate::models::TicketRequest;
use crate::validation::TicketRequestValidator;
use axum::extract::{FromRequest, Request};
use axum::{async_trait, Json};

/// A ticket request body that passed validation.
///
/// Bodies that are missing, `null` or not valid JSON are reported as a single
/// model-level validation failure.
#[derive(Debug, Clone)]
pub struct ValidTicketRequest(pub TicketRequest);

#[async_trait]
impl<S> FromRequest<S> for ValidTicketRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request = match Json::<Option<TicketRequest>>::from_request(req, state).await {
            Ok(Json(request)) => request,
            Err(rejection) => {
                tracing::debug!(%rejection, "unreadable ticket body");
                None
            }
        };

        let validator = TicketRequestValidator::new();
        let Some(request) = request else {
            return Err(ApiError::Validation(validator.validate(None).into_errors()));
        };

        validator
            .validate(Some(&request))
            .into_result()
            .map_err(ApiError::Validation)?;

        Ok(ValidTicketRequest(request))
    }
}
