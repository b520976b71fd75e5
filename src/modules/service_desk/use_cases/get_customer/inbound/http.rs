use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::service_desk::core::entities::CustomerId;
use crate::modules::service_desk::core::projections::CustomerDto;
use crate::modules::service_desk::errors::ApplicationError;
use crate::modules::service_desk::use_cases::get_customer::handler::get_customer;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<CustomerDto>, ApplicationError> {
    get_customer(state.store.as_ref(), id).await.map(Json)
}
