// Storage representation of the service desk entities.
//
// Purpose
// - Hold the records exactly as the store keeps them.
//
// Boundaries
// - Never serialized to clients directly. The projections module owns the
//   transfer shapes.

use chrono::NaiveDateTime;

pub type CustomerId = i32;
pub type EmployeeId = i32;
pub type ServiceTicketId = i32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTicket {
    pub id: ServiceTicketId,
    pub customer_id: CustomerId,
    pub employee_id: Option<EmployeeId>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<NaiveDateTime>,
}

/// A ticket accepted for creation that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServiceTicket {
    pub customer_id: CustomerId,
    pub employee_id: Option<EmployeeId>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<NaiveDateTime>,
}

impl NewServiceTicket {
    pub fn with_id(self, id: ServiceTicketId) -> ServiceTicket {
        ServiceTicket {
            id,
            customer_id: self.customer_id,
            employee_id: self.employee_id,
            description: self.description,
            emergency: self.emergency,
            date_completed: self.date_completed,
        }
    }
}
