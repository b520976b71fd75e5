use crate::modules::service_desk::core::entities::CustomerId;
use crate::modules::service_desk::core::ports::EntityStore;
use crate::modules::service_desk::core::projections::{CustomerDto, project_customer_with_tickets};
use crate::modules::service_desk::errors::ApplicationError;

pub async fn get_customer(
    store: &dyn EntityStore,
    id: CustomerId,
) -> Result<CustomerDto, ApplicationError> {
    let customer = store
        .find_customer(id)
        .await?
        .ok_or(ApplicationError::NotFound)?;
    let tickets = store.list_service_tickets_by_customer(id).await?;
    Ok(project_customer_with_tickets(&customer, &tickets))
}
