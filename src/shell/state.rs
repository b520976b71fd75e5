use crate::modules::service_desk::adapters::outbound::entity_store_in_memory::InMemoryEntityStore;
use crate::modules::service_desk::core::ports::EntityStore;
use crate::modules::service_desk::use_cases::create_service_ticket::handler::CreateServiceTicketHandler;
use crate::modules::service_desk::use_cases::delete_service_ticket::handler::DeleteServiceTicketHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
    pub create_handler: Arc<CreateServiceTicketHandler<InMemoryEntityStore>>,
    pub delete_handler: Arc<DeleteServiceTicketHandler<InMemoryEntityStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryEntityStore>) -> Self {
        Self {
            create_handler: Arc::new(CreateServiceTicketHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteServiceTicketHandler::new(store.clone())),
            store,
        }
    }
}
