use crate::modules::service_desk::core::entities::ServiceTicketId;
use crate::modules::service_desk::core::ports::EntityStore;
use crate::modules::service_desk::errors::ApplicationError;
use std::sync::Arc;

pub struct DeleteServiceTicketHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteServiceTicketHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Removes the ticket whose id matches, never the one at that position.
    pub async fn handle(&self, id: ServiceTicketId) -> Result<(), ApplicationError> {
        match self.store.delete_service_ticket(id).await? {
            Some(removed) => {
                tracing::info!(ticket_id = removed.id, "service ticket deleted");
                Ok(())
            }
            None => Err(ApplicationError::NotFound),
        }
    }
}
