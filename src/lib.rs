pub mod modules {
    pub mod service_desk {
        pub mod errors;
        pub mod core {
            pub mod completion_date;
            pub mod entities;
            pub mod ports;
            pub mod projections;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod list_service_tickets {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_service_ticket {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_customers {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_customer {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_employees {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_employee {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_service_ticket {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_service_ticket {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod entity_store_in_memory;
            }
        }
    }
}

pub mod shell;
