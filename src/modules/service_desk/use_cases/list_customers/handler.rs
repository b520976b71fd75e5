use crate::modules::service_desk::core::ports::EntityStore;
use crate::modules::service_desk::core::projections::{CustomerDto, project_customer};
use crate::modules::service_desk::errors::ApplicationError;

pub async fn list_customers(store: &dyn EntityStore) -> Result<Vec<CustomerDto>, ApplicationError> {
    let customers = store.list_customers().await?;
    Ok(customers.iter().map(project_customer).collect())
}
