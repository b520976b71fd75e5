use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::service_desk::core::entities::EmployeeId;
use crate::modules::service_desk::core::projections::EmployeeDto;
use crate::modules::service_desk::errors::ApplicationError;
use crate::modules::service_desk::use_cases::get_employee::handler::get_employee;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<EmployeeDto>, ApplicationError> {
    get_employee(state.store.as_ref(), id).await.map(Json)
}
