use axum::{Json, extract::State};

use crate::modules::service_desk::core::projections::ServiceTicketDto;
use crate::modules::service_desk::errors::ApplicationError;
use crate::modules::service_desk::use_cases::list_service_tickets::handler::list_service_tickets;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceTicketDto>>, ApplicationError> {
    list_service_tickets(state.store.as_ref()).await.map(Json)
}
