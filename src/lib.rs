pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{HttpEmployeeSource, InMemoryEmployeeSource};
pub use crate::api::employee_routes;
pub use crate::core::{facade::EmployeeFacade, retry::RetryConfig};
pub use crate::utils::error::{FacadeError, Result};
