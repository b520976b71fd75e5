use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::modules::service_desk::core::entities::CustomerId;
use crate::modules::service_desk::core::ports::StoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("not found")]
    NotFound,

    #[error("customer {0} does not exist")]
    UnknownCustomer(CustomerId),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Every failure is answered with a bare status code and an empty body.
impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UnknownCustomer(_) => StatusCode::BAD_REQUEST,
            Self::Store(e) => {
                tracing::error!(error = %e, "entity store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status.into_response()
    }
}
