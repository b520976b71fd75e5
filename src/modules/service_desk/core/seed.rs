// Fixed contents of the entity store at process start.

use chrono::{NaiveDate, NaiveDateTime};

use crate::modules::service_desk::core::entities::{Customer, Employee, ServiceTicket};

#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub customers: Vec<Customer>,
    pub employees: Vec<Employee>,
    pub service_tickets: Vec<ServiceTicket>,
}

fn completed_on(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn customer(id: i32, name: &str, address: &str) -> Customer {
    Customer {
        id,
        name: name.into(),
        address: address.into(),
    }
}

fn employee(id: i32, name: &str, specialty: &str) -> Employee {
    Employee {
        id,
        name: name.into(),
        specialty: specialty.into(),
    }
}

pub fn seed_data() -> SeedData {
    SeedData {
        customers: vec![
            customer(1, "Robert", "123 Street St"),
            customer(2, "Marley", "321 Street St"),
            customer(3, "Richard", "456 Street St"),
        ],
        employees: vec![
            employee(1, "George", "777 Street St"),
            employee(2, "Ronald", "888 Street St"),
        ],
        service_tickets: vec![
            ServiceTicket {
                id: 1,
                customer_id: 1,
                employee_id: Some(1),
                description: "dirty laundry".into(),
                emergency: true,
                date_completed: completed_on(2023, 8, 10),
            },
            ServiceTicket {
                id: 2,
                customer_id: 2,
                employee_id: None,
                description: "cat litter".into(),
                emergency: true,
                date_completed: None,
            },
            ServiceTicket {
                id: 3,
                customer_id: 3,
                employee_id: Some(1),
                description: "need to get rid of a dead body".into(),
                emergency: false,
                date_completed: completed_on(2023, 7, 29),
            },
            ServiceTicket {
                id: 4,
                customer_id: 1,
                employee_id: Some(2),
                description: "worrying and foreboding machinations".into(),
                emergency: false,
                date_completed: None,
            },
            ServiceTicket {
                id: 5,
                customer_id: 2,
                employee_id: None,
                description: "drive me to school".into(),
                emergency: true,
                date_completed: None,
            },
        ],
    }
}
