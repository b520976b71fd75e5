use crate::modules::service_desk::core::ports::EntityStore;
use crate::modules::service_desk::core::projections::{ServiceTicketDto, project_service_ticket};
use crate::modules::service_desk::errors::ApplicationError;

pub async fn list_service_tickets(
    store: &dyn EntityStore,
) -> Result<Vec<ServiceTicketDto>, ApplicationError> {
    let tickets = store.list_service_tickets().await?;
    Ok(tickets.iter().map(project_service_ticket).collect())
}
