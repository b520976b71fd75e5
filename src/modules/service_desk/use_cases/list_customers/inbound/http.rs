use axum::{Json, extract::State};

use crate::modules::service_desk::core::projections::CustomerDto;
use crate::modules::service_desk::errors::ApplicationError;
use crate::modules::service_desk::use_cases::list_customers::handler::list_customers;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerDto>>, ApplicationError> {
    list_customers(state.store.as_ref()).await.map(Json)
}
