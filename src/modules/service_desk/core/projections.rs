// Transfer shapes exposed to clients, and the pure functions that build them.
//
// Responsibilities
// - Rename and subset entity fields. Nothing is derived.
// - Nest related entities one level deep. Nested entities are always
//   projected shallowly, so a customer's tickets never embed the customer
//   again.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::modules::service_desk::core::entities::{
    Customer, CustomerId, Employee, EmployeeId, ServiceTicket, ServiceTicketId,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketDto {
    pub id: ServiceTicketId,
    pub customer_id: CustomerId,
    pub employee_id: Option<EmployeeId>,
    pub customer: Option<CustomerDto>,
    pub employee: Option<EmployeeDto>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: CustomerId,
    pub name: String,
    pub address: String,
    pub service_tickets: Option<Vec<ServiceTicketDto>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: EmployeeId,
    pub name: String,
    pub specialty: String,
    pub service_tickets: Option<Vec<ServiceTicketDto>>,
}

pub fn project_service_ticket(ticket: &ServiceTicket) -> ServiceTicketDto {
    ServiceTicketDto {
        id: ticket.id,
        customer_id: ticket.customer_id,
        employee_id: ticket.employee_id,
        customer: None,
        employee: None,
        description: ticket.description.clone(),
        emergency: ticket.emergency,
        date_completed: ticket.date_completed,
    }
}

/// Projects a ticket with its customer and employee nested. Either relation
/// stays `None` when it could not be resolved.
pub fn project_service_ticket_with_relations(
    ticket: &ServiceTicket,
    customer: Option<&Customer>,
    employee: Option<&Employee>,
) -> ServiceTicketDto {
    ServiceTicketDto {
        customer: customer.map(project_customer),
        employee: employee.map(project_employee),
        ..project_service_ticket(ticket)
    }
}

pub fn project_customer(customer: &Customer) -> CustomerDto {
    CustomerDto {
        id: customer.id,
        name: customer.name.clone(),
        address: customer.address.clone(),
        service_tickets: None,
    }
}

pub fn project_customer_with_tickets(
    customer: &Customer,
    tickets: &[ServiceTicket],
) -> CustomerDto {
    CustomerDto {
        service_tickets: Some(tickets.iter().map(project_service_ticket).collect()),
        ..project_customer(customer)
    }
}

pub fn project_employee(employee: &Employee) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        name: employee.name.clone(),
        specialty: employee.specialty.clone(),
        service_tickets: None,
    }
}

pub fn project_employee_with_tickets(
    employee: &Employee,
    tickets: &[ServiceTicket],
) -> EmployeeDto {
    EmployeeDto {
        service_tickets: Some(tickets.iter().map(project_service_ticket).collect()),
        ..project_employee(employee)
    }
}
