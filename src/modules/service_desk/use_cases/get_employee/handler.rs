use crate::modules::service_desk::core::entities::EmployeeId;
use crate::modules::service_desk::core::ports::EntityStore;
use crate::modules::service_desk::core::projections::{EmployeeDto, project_employee_with_tickets};
use crate::modules::service_desk::errors::ApplicationError;

pub async fn get_employee(
    store: &dyn EntityStore,
    id: EmployeeId,
) -> Result<EmployeeDto, ApplicationError> {
    let employee = store
        .find_employee(id)
        .await?
        .ok_or(ApplicationError::NotFound)?;
    let tickets = store.list_service_tickets_by_employee(id).await?;
    Ok(project_employee_with_tickets(&employee, &tickets))
}
