pub mod aggregation;
pub mod facade;
pub mod identifier;
pub mod retry;
pub mod translator;
pub mod validator;

pub use crate::domain::model::{
    EmployeeCreationRequest, EmployeeId, PublicEmployee, UpstreamCreationRequest,
    UpstreamDeletionRequest, UpstreamEmployeeRecord,
};
pub use crate::domain::ports::{ConfigProvider, EmployeeSource};
pub use crate::utils::error::Result;
