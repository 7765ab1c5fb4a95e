use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use employee_facade::api::ErrorBody;
use employee_facade::core::retry::{Backoff, RetryConfig};
use employee_facade::core::{PublicEmployee, UpstreamEmployeeRecord};
use employee_facade::{employee_routes, EmployeeFacade, InMemoryEmployeeSource};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

const SWAPNIL_ID: &str = "2f1a8de6-aeeb-4a99-b085-2b9cba532f44";

fn swapnil() -> UpstreamEmployeeRecord {
    UpstreamEmployeeRecord {
        id: Uuid::parse_str(SWAPNIL_ID).unwrap(),
        name: "Swapnil Patil".to_string(),
        salary: 100000,
        age: 30,
        title: "Developer".to_string(),
        email: "swapnil@company.com".to_string(),
    }
}

fn app(source: InMemoryEmployeeSource) -> Router {
    employee_routes(Arc::new(EmployeeFacade::new(
        source,
        RetryConfig {
            max_attempts: 3,
            backoff: Backoff::none(),
        },
    )))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_list_employees() {
    let app = app(InMemoryEmployeeSource::new(vec![swapnil()]));

    let (status, body) = send(&app, Method::GET, "/api/v1/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    let employees: Vec<PublicEmployee> = serde_json::from_slice(&body).unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "Swapnil Patil");
}

#[tokio::test]
async fn test_empty_list_is_not_found() {
    let app = app(InMemoryEmployeeSource::default());

    let (status, body) = send(&app, Method::GET, "/api/v1/employees", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_rate_limited_list_degrades_to_not_found() {
    let source = InMemoryEmployeeSource::new(vec![swapnil()]);
    source.fail_next(3);
    let app = app(source);

    let (status, _) = send(&app, Method::GET, "/api/v1/employees", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_by_name() {
    let app = app(InMemoryEmployeeSource::new(vec![swapnil()]));

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/employees/search?searchString=patil",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let employees: Vec<PublicEmployee> = serde_json::from_slice(&body).unwrap();
    assert_eq!(employees[0].name, "Swapnil Patil");

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/v1/employees/search?searchString=Prerana",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_employee_by_id() {
    let app = app(InMemoryEmployeeSource::new(vec![swapnil()]));

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/employees/{SWAPNIL_ID}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let employee: PublicEmployee = serde_json::from_slice(&body).unwrap();
    assert_eq!(employee.name, "Swapnil Patil");
}

#[tokio::test]
async fn test_get_employee_errors() {
    let app = app(InMemoryEmployeeSource::new(vec![swapnil()]));

    let (status, body) = send(&app, Method::GET, "/api/v1/employees/uuid-999", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.message, "Invalid employee ID format");

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/v1/employees/{}", Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_highest_salary_and_top_earners() {
    let app = app(InMemoryEmployeeSource::seeded());

    let (status, body) = send(&app, Method::GET, "/api/v1/employees/highestSalary", None).await;
    assert_eq!(status, StatusCode::OK);
    let highest: i64 = serde_json::from_slice(&body).unwrap();
    assert_eq!(highest, 200000);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/employees/top10HighestEarningEmployeeNames",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(names.len(), 5);
    assert_eq!(names[0], "Prerana Patil");
}

#[tokio::test]
async fn test_aggregations_on_empty_source() {
    let app = app(InMemoryEmployeeSource::default());

    let (status, body) = send(&app, Method::GET, "/api/v1/employees/highestSalary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"0");

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/v1/employees/top10HighestEarningEmployeeNames",
        None,
    )
    .await;
    assert_eq!(body, b"[]");
}

#[tokio::test]
async fn test_create_then_get_then_delete() {
    let source = InMemoryEmployeeSource::default();
    let app = app(source.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/employees",
        Some(serde_json::json!({
            "name": "Swapnil Patil",
            "salary": 60000,
            "age": 28,
            "title": "QA Engineer"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: PublicEmployee = serde_json::from_slice(&body).unwrap();
    assert_eq!(created.name, "Swapnil Patil");
    assert_eq!(created.salary, 60000);
    assert_eq!(created.age, 28);
    assert_eq!(created.title, "QA Engineer");

    let uri = format!("/api/v1/employees/{}", created.id);
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: PublicEmployee = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched, created);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "Swapnil Patil");

    assert!(source.is_empty().await);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_validation_errors() {
    let source = InMemoryEmployeeSource::default();
    let app = app(source.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/employees",
        Some(serde_json::json!({
            "name": "Swapnil Patil",
            "salary": 0,
            "age": 30,
            "title": "Developer"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.message, "Employee salary must be positive.");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/employees",
        Some(serde_json::Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.message, "Employee input is null");

    assert!(source.is_empty().await);
}

#[tokio::test]
async fn test_rate_limited_create_is_too_many_requests() {
    let source = InMemoryEmployeeSource::default();
    source.fail_next(3);
    let app = app(source.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/employees",
        Some(serde_json::json!({
            "name": "Amay",
            "salary": 70000,
            "age": 32,
            "title": "Engineer"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.status, 429);
    assert!(source.is_empty().await);
}

#[tokio::test]
async fn test_create_recovers_within_retry_budget() {
    let source = InMemoryEmployeeSource::default();
    source.fail_next(2);
    let app = app(source.clone());

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/employees",
        Some(serde_json::json!({
            "name": "Amay",
            "salary": 70000,
            "age": 32,
            "title": "Engineer"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(source.len().await, 1);
}

#[tokio::test]
async fn test_malformed_create_body_is_bad_request() {
    let source = InMemoryEmployeeSource::default();
    let app = app(source.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/employees",
        Some(serde_json::json!({
            "name": "A",
            "salary": "abc",
            "age": 30,
            "title": "Dev"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.status, 400);
    assert_eq!(error.error, "Bad Request");

    // No body and no content type.
    let (status, body) = send(&app, Method::POST, "/api/v1/employees", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.status, 400);

    assert!(source.is_empty().await);
}

#[tokio::test]
async fn test_search_without_search_string_is_bad_request() {
    let app = app(InMemoryEmployeeSource::new(vec![swapnil()]));

    let (status, body) = send(&app, Method::GET, "/api/v1/employees/search", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.status, 400);
}
