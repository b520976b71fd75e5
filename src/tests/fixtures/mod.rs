pub mod http;
pub mod service_tickets;
pub mod state;
