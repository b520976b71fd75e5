// Builders for service ticket commands and records used across tests.
// Defaults describe an open, unassigned, non-emergency ticket for customer 1.

use chrono::NaiveDateTime;

use crate::modules::service_desk::core::entities::{CustomerId, EmployeeId, NewServiceTicket};
use crate::modules::service_desk::use_cases::create_service_ticket::command::CreateServiceTicket;

pub struct CreateServiceTicketBuilder {
    inner: CreateServiceTicket,
}

impl Default for CreateServiceTicketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateServiceTicketBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateServiceTicket {
                customer_id: 1,
                employee_id: None,
                description: "squeaky door".to_string(),
                emergency: false,
                date_completed: None,
            },
        }
    }

    pub fn customer_id(mut self, v: CustomerId) -> Self {
        self.inner.customer_id = v;
        self
    }

    pub fn employee_id(mut self, v: Option<EmployeeId>) -> Self {
        self.inner.employee_id = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn emergency(mut self, v: bool) -> Self {
        self.inner.emergency = v;
        self
    }

    pub fn date_completed(mut self, v: Option<NaiveDateTime>) -> Self {
        self.inner.date_completed = v;
        self
    }

    pub fn build(self) -> CreateServiceTicket {
        self.inner
    }
}

pub struct NewServiceTicketBuilder {
    command: CreateServiceTicketBuilder,
}

impl Default for NewServiceTicketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewServiceTicketBuilder {
    pub fn new() -> Self {
        Self {
            command: CreateServiceTicketBuilder::new(),
        }
    }

    pub fn employee_id(mut self, v: Option<EmployeeId>) -> Self {
        self.command = self.command.employee_id(v);
        self
    }

    pub fn build(self) -> NewServiceTicket {
        let command = self.command.build();
        NewServiceTicket {
            customer_id: command.customer_id,
            employee_id: command.employee_id,
            description: command.description,
            emergency: command.emergency,
            date_completed: command.date_completed,
        }
    }
}
