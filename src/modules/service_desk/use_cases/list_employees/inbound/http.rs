use axum::{Json, extract::State};

use crate::modules::service_desk::core::projections::EmployeeDto;
use crate::modules::service_desk::errors::ApplicationError;
use crate::modules::service_desk::use_cases::list_employees::handler::list_employees;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeDto>>, ApplicationError> {
    list_employees(state.store.as_ref()).await.map(Json)
}
