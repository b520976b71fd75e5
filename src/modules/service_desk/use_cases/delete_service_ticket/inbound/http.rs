use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::modules::service_desk::core::entities::ServiceTicketId;
use crate::modules::service_desk::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<ServiceTicketId>,
) -> Result<StatusCode, ApplicationError> {
    state.delete_handler.handle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
