use axum::{Extension, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::service_desk::use_cases::create_service_ticket::inbound::http as create_service_ticket_http;
use crate::modules::service_desk::use_cases::delete_service_ticket::inbound::http as delete_service_ticket_http;
use crate::modules::service_desk::use_cases::get_customer::inbound::http as get_customer_http;
use crate::modules::service_desk::use_cases::get_employee::inbound::http as get_employee_http;
use crate::modules::service_desk::use_cases::get_service_ticket::inbound::http as get_service_ticket_http;
use crate::modules::service_desk::use_cases::list_customers::inbound::http as list_customers_http;
use crate::modules::service_desk::use_cases::list_employees::inbound::http as list_employees_http;
use crate::modules::service_desk::use_cases::list_service_tickets::inbound::http as list_service_tickets_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/servicetickets",
            get(list_service_tickets_http::handle).post(create_service_ticket_http::handle),
        )
        .route(
            "/servicetickets/{id}",
            get(get_service_ticket_http::handle).delete(delete_service_ticket_http::handle),
        )
        .route("/customers", get(list_customers_http::handle))
        .route("/customers/{id}", get(get_customer_http::handle))
        .route("/employees", get(list_employees_http::handle))
        .route("/employees/{id}", get(get_employee_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
