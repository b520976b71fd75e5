// Ports define what the service desk needs from storage, without implementing it.
//
// Purpose
// - Describe the entity store as a trait so handlers never see the backing collection.
//
// Boundaries
// - No concrete storage here. Adapters implement the trait in the adapters layer.
//
// Testing guidance
// - The in memory adapter can be toggled offline to exercise the failure paths.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::service_desk::core::entities::{
    Customer, CustomerId, Employee, EmployeeId, NewServiceTicket, ServiceTicket, ServiceTicketId,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError>;
    async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;
    async fn find_employee(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError>;

    async fn list_service_tickets(&self) -> Result<Vec<ServiceTicket>, StoreError>;
    async fn find_service_ticket(
        &self,
        id: ServiceTicketId,
    ) -> Result<Option<ServiceTicket>, StoreError>;
    async fn list_service_tickets_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<ServiceTicket>, StoreError>;
    async fn list_service_tickets_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<ServiceTicket>, StoreError>;

    /// Appends the ticket under the next id (current max + 1) and returns it.
    async fn insert_service_ticket(
        &self,
        ticket: NewServiceTicket,
    ) -> Result<ServiceTicket, StoreError>;

    /// Removes the ticket whose id matches. `None` when no such ticket exists.
    async fn delete_service_ticket(
        &self,
        id: ServiceTicketId,
    ) -> Result<Option<ServiceTicket>, StoreError>;
}
