use chrono::NaiveDateTime;

use crate::modules::service_desk::core::entities::{CustomerId, EmployeeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateServiceTicket {
    pub customer_id: CustomerId,
    pub employee_id: Option<EmployeeId>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<NaiveDateTime>,
}
