use crate::modules::service_desk::core::ports::EntityStore;
use crate::modules::service_desk::core::projections::{EmployeeDto, project_employee};
use crate::modules::service_desk::errors::ApplicationError;

pub async fn list_employees(store: &dyn EntityStore) -> Result<Vec<EmployeeDto>, ApplicationError> {
    let employees = store.list_employees().await?;
    Ok(employees.iter().map(project_employee).collect())
}
