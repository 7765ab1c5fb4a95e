use crate::core::retry::RetryConfig;
use crate::domain::model::{
    UpstreamCreationRequest, UpstreamDeletionRequest, UpstreamEmployeeRecord,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The system of record the facade reads from and writes to.
///
/// Implementations report rate limiting and transport faults as
/// `FacadeError::UpstreamTransientFailure`; everything else they cannot
/// handle as `FacadeError::UpstreamUnexpectedFailure`.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn list_all(&self) -> Result<Vec<UpstreamEmployeeRecord>>;

    async fn create(&self, request: UpstreamCreationRequest) -> Result<UpstreamEmployeeRecord>;

    /// Returns `false` when no record carried the requested name.
    async fn delete(&self, request: UpstreamDeletionRequest) -> Result<bool>;
}

pub trait ConfigProvider: Send + Sync {
    fn upstream_url(&self) -> &str;
    fn bind_address(&self) -> String;
    fn retry_config(&self) -> RetryConfig;
    fn request_timeout(&self) -> Duration;
}
