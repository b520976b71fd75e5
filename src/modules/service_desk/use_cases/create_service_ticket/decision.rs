use crate::modules::service_desk::core::entities::{Customer, CustomerId, NewServiceTicket};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("customer {0} does not exist")]
    UnknownCustomer(CustomerId),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        ticket: NewServiceTicket,
        customer: Customer,
    },
    Rejected {
        reason: DecideError,
    },
}
