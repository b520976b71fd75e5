use crate::modules::service_desk::core::entities::ServiceTicketId;
use crate::modules::service_desk::core::ports::EntityStore;
use crate::modules::service_desk::core::projections::{
    ServiceTicketDto, project_service_ticket_with_relations,
};
use crate::modules::service_desk::errors::ApplicationError;

/// Loads a ticket with its customer and employee nested. A relation that
/// does not resolve (unassigned employee, dangling key) is left empty.
pub async fn get_service_ticket(
    store: &dyn EntityStore,
    id: ServiceTicketId,
) -> Result<ServiceTicketDto, ApplicationError> {
    let ticket = store
        .find_service_ticket(id)
        .await?
        .ok_or(ApplicationError::NotFound)?;

    let customer = store.find_customer(ticket.customer_id).await?;
    let employee = match ticket.employee_id {
        Some(employee_id) => store.find_employee(employee_id).await?,
        None => None,
    };

    Ok(project_service_ticket_with_relations(
        &ticket,
        customer.as_ref(),
        employee.as_ref(),
    ))
}
