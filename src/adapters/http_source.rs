use crate::core::{
    ConfigProvider, EmployeeSource, UpstreamCreationRequest, UpstreamDeletionRequest,
    UpstreamEmployeeRecord,
};
use crate::domain::model::UpstreamResponse;
use crate::utils::error::{FacadeError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Employee source backed by the upstream mock-employee REST API.
///
/// Every payload arrives wrapped as `{"data": ..., "status": ...}`. Rate
/// limiting (429) and gateway errors are reported as transient so the facade
/// retries them.
#[derive(Debug, Clone)]
pub struct HttpEmployeeSource {
    client: Client,
    base_url: String,
}

impl HttpEmployeeSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FacadeError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.upstream_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn is_transient_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

fn classify_transport_error(operation: &str, e: reqwest::Error) -> FacadeError {
    if e.is_timeout() || e.is_connect() {
        FacadeError::transient(format!("{} could not reach upstream: {}", operation, e))
    } else {
        FacadeError::unexpected(format!("{} failed: {}", operation, e))
    }
}

async fn read_data<T: DeserializeOwned>(operation: &str, response: Response) -> Result<T> {
    let status = response.status();
    tracing::debug!("Upstream {} response status: {}", operation, status);

    if is_transient_status(status) {
        return Err(FacadeError::transient(format!(
            "{} returned {}",
            operation, status
        )));
    }
    if !status.is_success() {
        return Err(FacadeError::unexpected(format!(
            "{} returned {}",
            operation, status
        )));
    }

    let body: UpstreamResponse<T> = response
        .json()
        .await
        .map_err(|e| classify_transport_error(operation, e))?;

    body.data
        .ok_or_else(|| FacadeError::unexpected(format!("{} returned no data", operation)))
}

#[async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn list_all(&self) -> Result<Vec<UpstreamEmployeeRecord>> {
        tracing::debug!("Making API request to: {}", self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| classify_transport_error("list_all", e))?;

        read_data("list_all", response).await
    }

    async fn create(&self, request: UpstreamCreationRequest) -> Result<UpstreamEmployeeRecord> {
        tracing::debug!("Posting new employee {} to {}", request.name, self.base_url);
        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_transport_error("create", e))?;

        read_data("create", response).await
    }

    async fn delete(&self, request: UpstreamDeletionRequest) -> Result<bool> {
        tracing::debug!("Deleting employee {} at {}", request.name, self.base_url);
        let response = self
            .client
            .delete(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_transport_error("delete", e))?;

        read_data("delete", response).await
    }
}
