// HTTP transport: axum routes in front of the facade and the error-to-status mapping.

pub mod error;
pub mod routes;

pub use error::{status_for, ErrorBody};
pub use routes::{employee_routes, BASE_PATH};
