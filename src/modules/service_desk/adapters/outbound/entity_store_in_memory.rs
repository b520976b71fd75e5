// In memory implementation of the EntityStore port.
//
// Purpose
// - Back the API for the lifetime of the process. Nothing survives a restart.
//
// Responsibilities
// - Keep customers, employees and service tickets in insertion order.
// - Assign ticket ids and append under one write lock so concurrent inserts
//   never hand out the same id.

use crate::modules::service_desk::core::entities::{
    Customer, CustomerId, Employee, EmployeeId, NewServiceTicket, ServiceTicket, ServiceTicketId,
};
use crate::modules::service_desk::core::ports::{EntityStore, StoreError};
use crate::modules::service_desk::core::seed::SeedData;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    service_tickets: Vec<ServiceTicket>,
}

#[derive(Default)]
pub struct InMemoryEntityStore {
    tables: RwLock<Tables>,
    is_offline: bool,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: SeedData) -> Self {
        Self {
            tables: RwLock::new(Tables {
                customers: seed.customers,
                employees: seed.employees,
                service_tickets: seed.service_tickets,
            }),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entity store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.customers.clone())
    }

    async fn find_customer(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        Ok(guard.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.employees.clone())
    }

    async fn find_employee(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        Ok(guard.employees.iter().find(|e| e.id == id).cloned())
    }

    async fn list_service_tickets(&self) -> Result<Vec<ServiceTicket>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.service_tickets.clone())
    }

    async fn find_service_ticket(
        &self,
        id: ServiceTicketId,
    ) -> Result<Option<ServiceTicket>, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        Ok(guard.service_tickets.iter().find(|t| t.id == id).cloned())
    }

    async fn list_service_tickets_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<ServiceTicket>, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        Ok(guard
            .service_tickets
            .iter()
            .filter(|t| t.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn list_service_tickets_by_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<Vec<ServiceTicket>, StoreError> {
        self.ensure_online()?;
        let guard = self.tables.read().await;
        Ok(guard
            .service_tickets
            .iter()
            .filter(|t| t.employee_id == Some(employee_id))
            .cloned()
            .collect())
    }

    async fn insert_service_ticket(
        &self,
        ticket: NewServiceTicket,
    ) -> Result<ServiceTicket, StoreError> {
        self.ensure_online()?;
        let mut guard = self.tables.write().await;
        let next_id = guard
            .service_tickets
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            + 1;
        let stored = ticket.with_id(next_id);
        guard.service_tickets.push(stored.clone());
        Ok(stored)
    }

    async fn delete_service_ticket(
        &self,
        id: ServiceTicketId,
    ) -> Result<Option<ServiceTicket>, StoreError> {
        self.ensure_online()?;
        let mut guard = self.tables.write().await;
        let position = guard.service_tickets.iter().position(|t| t.id == id);
        Ok(position.map(|index| guard.service_tickets.remove(index)))
    }
}
