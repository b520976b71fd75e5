use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::modules::service_desk::core::completion_date;
use crate::modules::service_desk::core::entities::{CustomerId, EmployeeId};
use crate::modules::service_desk::use_cases::create_service_ticket::command::CreateServiceTicket;
use crate::shell::state::AppState;

/// Request body. An `id` sent by the client is ignored; the store assigns it.
/// `dateCompleted` takes a bare date or a timestamp, with or without offset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceTicketBody {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default, deserialize_with = "completion_date::deserialize_optional")]
    pub date_completed: Option<NaiveDateTime>,
}

impl From<CreateServiceTicketBody> for CreateServiceTicket {
    fn from(body: CreateServiceTicketBody) -> Self {
        Self {
            customer_id: body.customer_id,
            employee_id: body.employee_id,
            description: body.description,
            emergency: body.emergency,
            date_completed: body.date_completed,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateServiceTicketBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "malformed service ticket body");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match state.create_handler.handle(body.into()).await {
        Ok(ticket) => (
            StatusCode::CREATED,
            [(header::LOCATION, format!("/servicetickets/{}", ticket.id))],
            Json(ticket),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
