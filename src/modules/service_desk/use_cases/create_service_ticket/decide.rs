use crate::modules::service_desk::core::entities::{Customer, NewServiceTicket};
use crate::modules::service_desk::use_cases::create_service_ticket::command::CreateServiceTicket;
use crate::modules::service_desk::use_cases::create_service_ticket::decision::{
    DecideError, Decision,
};

/// `customer` is the lookup result for `command.customer_id`. The employee
/// reference is accepted as given.
pub fn decide_create(customer: Option<Customer>, command: CreateServiceTicket) -> Decision {
    let Some(customer) = customer.filter(|c| c.id == command.customer_id) else {
        return Decision::Rejected {
            reason: DecideError::UnknownCustomer(command.customer_id),
        };
    };

    Decision::Accepted {
        ticket: NewServiceTicket {
            customer_id: command.customer_id,
            employee_id: command.employee_id,
            description: command.description,
            emergency: command.emergency,
            date_completed: command.date_completed,
        },
        customer,
    }
}
