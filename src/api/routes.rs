//! Employee REST endpoints, one per facade operation.
//!
//! ```text
//! GET    /api/v1/employees
//! GET    /api/v1/employees/search?searchString=...
//! GET    /api/v1/employees/highestSalary
//! GET    /api/v1/employees/top10HighestEarningEmployeeNames
//! GET    /api/v1/employees/:id
//! POST   /api/v1/employees
//! DELETE /api/v1/employees/:id
//! ```

use crate::core::facade::EmployeeFacade;
use crate::core::{EmployeeCreationRequest, EmployeeSource};
use crate::utils::error::FacadeError;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub const BASE_PATH: &str = "/api/v1/employees";

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "searchString")]
    pub search_string: String,
}

pub fn employee_routes<S: EmployeeSource + 'static>(facade: Arc<EmployeeFacade<S>>) -> Router {
    Router::new()
        .route(
            BASE_PATH,
            get(list_employees::<S>).post(create_employee::<S>),
        )
        .route(&format!("{BASE_PATH}/search"), get(search_employees::<S>))
        .route(&format!("{BASE_PATH}/highestSalary"), get(highest_salary::<S>))
        .route(
            &format!("{BASE_PATH}/top10HighestEarningEmployeeNames"),
            get(top_earner_names::<S>),
        )
        .route(
            &format!("{BASE_PATH}/:id"),
            get(get_employee::<S>).delete(delete_employee::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(facade)
}

async fn list_employees<S: EmployeeSource + 'static>(
    State(facade): State<Arc<EmployeeFacade<S>>>,
) -> Result<Response, FacadeError> {
    let employees = facade.list_employees().await?;
    if employees.is_empty() {
        tracing::info!("No employees found");
        return Ok(StatusCode::NOT_FOUND.into_response());
    }
    Ok(Json(employees).into_response())
}

async fn search_employees<S: EmployeeSource + 'static>(
    State(facade): State<Arc<EmployeeFacade<S>>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Response, FacadeError> {
    let Query(query) = query?;
    let employees = facade.search_by_name(&query.search_string).await?;
    if employees.is_empty() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }
    Ok(Json(employees).into_response())
}

async fn get_employee<S: EmployeeSource + 'static>(
    State(facade): State<Arc<EmployeeFacade<S>>>,
    Path(id): Path<String>,
) -> Result<Response, FacadeError> {
    let employee = facade.get_employee_by_id(&id).await?;
    Ok(Json(employee).into_response())
}

async fn highest_salary<S: EmployeeSource + 'static>(
    State(facade): State<Arc<EmployeeFacade<S>>>,
) -> Result<Json<i64>, FacadeError> {
    Ok(Json(facade.highest_salary().await?))
}

async fn top_earner_names<S: EmployeeSource + 'static>(
    State(facade): State<Arc<EmployeeFacade<S>>>,
) -> Result<Json<Vec<String>>, FacadeError> {
    Ok(Json(facade.top_earner_names().await?))
}

/// A JSON `null` body reaches the facade as `None`.
async fn create_employee<S: EmployeeSource + 'static>(
    State(facade): State<Arc<EmployeeFacade<S>>>,
    payload: Result<Json<Option<EmployeeCreationRequest>>, JsonRejection>,
) -> Result<Response, FacadeError> {
    let Json(input) = payload?;
    let employee = facade.create_employee(input).await?;
    Ok((StatusCode::CREATED, Json(employee)).into_response())
}

async fn delete_employee<S: EmployeeSource + 'static>(
    State(facade): State<Arc<EmployeeFacade<S>>>,
    Path(id): Path<String>,
) -> Result<String, FacadeError> {
    facade.delete_employee_by_id(&id).await
}
