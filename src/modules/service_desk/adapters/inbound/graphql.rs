use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::service_desk::core::completion_date::parse_date_completed;
use crate::modules::service_desk::core::entities::{CustomerId, EmployeeId, ServiceTicketId};
use crate::modules::service_desk::core::projections::{CustomerDto, EmployeeDto, ServiceTicketDto};
use crate::modules::service_desk::errors::ApplicationError;
use crate::modules::service_desk::use_cases::create_service_ticket::command::CreateServiceTicket;
use crate::modules::service_desk::use_cases::get_customer::handler::get_customer;
use crate::modules::service_desk::use_cases::get_employee::handler::get_employee;
use crate::modules::service_desk::use_cases::get_service_ticket::handler::get_service_ticket;
use crate::modules::service_desk::use_cases::list_customers::handler::list_customers;
use crate::modules::service_desk::use_cases::list_employees::handler::list_employees;
use crate::modules::service_desk::use_cases::list_service_tickets::handler::list_service_tickets;
use crate::shell::state::AppState;

const DATE_COMPLETED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(SimpleObject, Clone)]
#[graphql(name = "ServiceTicket")]
pub struct GqlServiceTicket {
    pub id: ServiceTicketId,
    pub customer_id: CustomerId,
    pub employee_id: Option<EmployeeId>,
    pub customer: Option<GqlCustomer>,
    pub employee: Option<GqlEmployee>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<String>,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Customer")]
pub struct GqlCustomer {
    pub id: CustomerId,
    pub name: String,
    pub address: String,
    pub service_tickets: Option<Vec<GqlServiceTicket>>,
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Employee")]
pub struct GqlEmployee {
    pub id: EmployeeId,
    pub name: String,
    pub specialty: String,
    pub service_tickets: Option<Vec<GqlServiceTicket>>,
}

impl From<ServiceTicketDto> for GqlServiceTicket {
    fn from(v: ServiceTicketDto) -> Self {
        Self {
            id: v.id,
            customer_id: v.customer_id,
            employee_id: v.employee_id,
            customer: v.customer.map(Into::into),
            employee: v.employee.map(Into::into),
            description: v.description,
            emergency: v.emergency,
            date_completed: v
                .date_completed
                .map(|d| d.format(DATE_COMPLETED_FORMAT).to_string()),
        }
    }
}

impl From<CustomerDto> for GqlCustomer {
    fn from(v: CustomerDto) -> Self {
        Self {
            id: v.id,
            name: v.name,
            address: v.address,
            service_tickets: v
                .service_tickets
                .map(|tickets| tickets.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<EmployeeDto> for GqlEmployee {
    fn from(v: EmployeeDto) -> Self {
        Self {
            id: v.id,
            name: v.name,
            specialty: v.specialty,
            service_tickets: v
                .service_tickets
                .map(|tickets| tickets.into_iter().map(Into::into).collect()),
        }
    }
}

fn to_gql_error(error: ApplicationError) -> async_graphql::Error {
    async_graphql::Error::new(error.to_string())
}

/// Lookups by id resolve to `null` instead of an error when nothing matches.
fn found<T, U: From<T>>(result: Result<T, ApplicationError>) -> GqlResult<Option<U>> {
    match result {
        Ok(v) => Ok(Some(v.into())),
        Err(ApplicationError::NotFound) => Ok(None),
        Err(e) => Err(to_gql_error(e)),
    }
}

fn all<T, U: From<T>>(result: Result<Vec<T>, ApplicationError>) -> GqlResult<Vec<U>> {
    result
        .map(|items| items.into_iter().map(Into::into).collect())
        .map_err(to_gql_error)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn service_tickets(&self, context: &Context<'_>) -> GqlResult<Vec<GqlServiceTicket>> {
        let state = context.data_unchecked::<AppState>();
        all(list_service_tickets(state.store.as_ref()).await)
    }

    async fn service_ticket(
        &self,
        context: &Context<'_>,
        id: ServiceTicketId,
    ) -> GqlResult<Option<GqlServiceTicket>> {
        let state = context.data_unchecked::<AppState>();
        found(get_service_ticket(state.store.as_ref(), id).await)
    }

    async fn customers(&self, context: &Context<'_>) -> GqlResult<Vec<GqlCustomer>> {
        let state = context.data_unchecked::<AppState>();
        all(list_customers(state.store.as_ref()).await)
    }

    async fn customer(
        &self,
        context: &Context<'_>,
        id: CustomerId,
    ) -> GqlResult<Option<GqlCustomer>> {
        let state = context.data_unchecked::<AppState>();
        found(get_customer(state.store.as_ref(), id).await)
    }

    async fn employees(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEmployee>> {
        let state = context.data_unchecked::<AppState>();
        all(list_employees(state.store.as_ref()).await)
    }

    async fn employee(
        &self,
        context: &Context<'_>,
        id: EmployeeId,
    ) -> GqlResult<Option<GqlEmployee>> {
        let state = context.data_unchecked::<AppState>();
        found(get_employee(state.store.as_ref(), id).await)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Same defaults as the HTTP body: empty description, not an emergency.
    async fn create_service_ticket(
        &self,
        context: &Context<'_>,
        customer_id: CustomerId,
        employee_id: Option<EmployeeId>,
        description: Option<String>,
        emergency: Option<bool>,
        date_completed: Option<String>,
    ) -> GqlResult<GqlServiceTicket> {
        let state = context.data_unchecked::<AppState>();

        let date_completed = match date_completed {
            Some(raw) => Some(parse_date_completed(&raw).ok_or_else(|| {
                async_graphql::Error::new(format!("invalid dateCompleted {raw:?}"))
            })?),
            None => None,
        };

        let command = CreateServiceTicket {
            customer_id,
            employee_id,
            description: description.unwrap_or_default(),
            emergency: emergency.unwrap_or(false),
            date_completed,
        };

        state
            .create_handler
            .handle(command)
            .await
            .map(Into::into)
            .map_err(to_gql_error)
    }

    /// `false` when no ticket has the given id.
    async fn delete_service_ticket(
        &self,
        context: &Context<'_>,
        id: ServiceTicketId,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        match state.delete_handler.handle(id).await {
            Ok(()) => Ok(true),
            Err(ApplicationError::NotFound) => Ok(false),
            Err(e) => Err(to_gql_error(e)),
        }
    }
}
