use crate::modules::service_desk::core::ports::EntityStore;
use crate::modules::service_desk::core::projections::{
    ServiceTicketDto, project_service_ticket_with_relations,
};
use crate::modules::service_desk::errors::ApplicationError;
use crate::modules::service_desk::use_cases::create_service_ticket::command::CreateServiceTicket;
use crate::modules::service_desk::use_cases::create_service_ticket::decide::decide_create;
use crate::modules::service_desk::use_cases::create_service_ticket::decision::{
    DecideError, Decision,
};
use std::sync::Arc;

pub struct CreateServiceTicketHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateServiceTicketHandler<TStore>
where
    TStore: EntityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Stores the ticket and returns it with only its customer nested.
    pub async fn handle(
        &self,
        command: CreateServiceTicket,
    ) -> Result<ServiceTicketDto, ApplicationError> {
        let customer = self.store.find_customer(command.customer_id).await?;

        match decide_create(customer, command) {
            Decision::Accepted { ticket, customer } => {
                let stored = self.store.insert_service_ticket(ticket).await?;
                tracing::info!(
                    ticket_id = stored.id,
                    customer_id = stored.customer_id,
                    "service ticket created"
                );
                Ok(project_service_ticket_with_relations(
                    &stored,
                    Some(&customer),
                    None,
                ))
            }
            Decision::Rejected {
                reason: DecideError::UnknownCustomer(customer_id),
            } => {
                tracing::warn!(customer_id, "service ticket rejected: unknown customer");
                Err(ApplicationError::UnknownCustomer(customer_id))
            }
        }
    }
}

#[cfg(test)]
mod create_service_ticket_handler_tests {
    use super::*;
    use crate::modules::service_desk::adapters::outbound::entity_store_in_memory::InMemoryEntityStore;
    use crate::modules::service_desk::core::ports::StoreError;
    use crate::modules::service_desk::core::seed::seed_data;
    use crate::tests::fixtures::service_tickets::CreateServiceTicketBuilder;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (Arc<InMemoryEntityStore>, CreateServiceTicket) {
        let store = Arc::new(InMemoryEntityStore::seeded(seed_data()));
        let command = CreateServiceTicketBuilder::new().build();
        (store, command)
    }

    #[rstest]
    #[tokio::test]
    async fn handle_create_appends_with_the_next_id(
        before_each: (Arc<InMemoryEntityStore>, CreateServiceTicket),
    ) {
        let (store, command) = before_each;
        let handler = CreateServiceTicketHandler::new(store.clone());

        let created = handler.handle(command).await.expect("handle failed");

        assert_eq!(created.id, 6);
        assert_eq!(created.customer.map(|c| c.name), Some("Robert".into()));
        assert_eq!(created.employee, None);
        let stored = store.find_service_ticket(6).await.unwrap();
        assert!(stored.is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn handle_create_stores_and_returns_the_completion_date(
        before_each: (Arc<InMemoryEntityStore>, CreateServiceTicket),
    ) {
        let (store, _) = before_each;
        let handler = CreateServiceTicketHandler::new(store.clone());
        let completed = NaiveDate::from_ymd_opt(2024, 2, 29)
            .and_then(|d| d.and_hms_opt(16, 45, 0))
            .unwrap();
        let command = CreateServiceTicketBuilder::new()
            .customer_id(3)
            .date_completed(Some(completed))
            .build();

        let created = handler.handle(command).await.expect("handle failed");

        assert_eq!(created.date_completed, Some(completed));
        let stored = store.find_service_ticket(created.id).await.unwrap().unwrap();
        assert_eq!(stored.date_completed, Some(completed));
        assert_eq!(stored.customer_id, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_create_fails_if_customer_is_unknown(
        before_each: (Arc<InMemoryEntityStore>, CreateServiceTicket),
    ) {
        let (store, _) = before_each;
        let handler = CreateServiceTicketHandler::new(store.clone());
        let command = CreateServiceTicketBuilder::new().customer_id(99).build();

        let result = handler.handle(command).await;

        assert_eq!(result, Err(ApplicationError::UnknownCustomer(99)));
        assert_eq!(store.list_service_tickets().await.unwrap().len(), 5);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_create_fails_if_entity_store_is_offline() {
        let mut store = InMemoryEntityStore::seeded(seed_data());
        store.toggle_offline();
        let handler = CreateServiceTicketHandler::new(Arc::new(store));

        let result = handler
            .handle(CreateServiceTicketBuilder::new().build())
            .await;

        assert_eq!(
            result,
            Err(ApplicationError::Store(StoreError::Backend(
                "Entity store offline".into()
            )))
        );
    }
}
