use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::service_desk::core::entities::ServiceTicketId;
use crate::modules::service_desk::core::projections::ServiceTicketDto;
use crate::modules::service_desk::errors::ApplicationError;
use crate::modules::service_desk::use_cases::get_service_ticket::handler::get_service_ticket;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<ServiceTicketId>,
) -> Result<Json<ServiceTicketDto>, ApplicationError> {
    get_service_ticket(state.store.as_ref(), id).await.map(Json)
}
