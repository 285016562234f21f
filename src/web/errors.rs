use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::web::models::ErrorBody;

/// Failures of the `/api/chat` proxy endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing \"query\" string.")]
    MissingQuery,
    /// Anything that went wrong reaching or reading the upstream, including
    /// an inbound body that is not JSON at all.
    #[error("Upstream error")]
    Upstream(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            ApiError::MissingQuery => None,
            ApiError::Upstream(details) => Some(details.clone()),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            details,
        })
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Upstream(err.to_string())
    }
}
