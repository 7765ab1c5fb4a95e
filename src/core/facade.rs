use crate::core::aggregation::{self, TOP_EARNERS_LIMIT};
use crate::core::identifier::parse_employee_id;
use crate::core::retry::{RetryConfig, RetryPolicy};
use crate::core::translator;
use crate::core::validator::validate_creation_request;
use crate::domain::model::{EmployeeCreationRequest, PublicEmployee, UpstreamEmployeeRecord};
use crate::domain::ports::EmployeeSource;
use crate::utils::error::{FacadeError, Result};

/// Public employee operations over an unreliable [`EmployeeSource`].
///
/// Holds no per-request state: every read fetches a fresh snapshot, so the
/// facade can be shared across tasks behind an `Arc`.
pub struct EmployeeFacade<S: EmployeeSource> {
    source: S,
    retry: RetryPolicy,
}

impl<S: EmployeeSource> EmployeeFacade<S> {
    pub fn new(source: S, retry_config: RetryConfig) -> Self {
        Self {
            source,
            retry: RetryPolicy::new(retry_config),
        }
    }

    /// Reads degrade to an empty snapshot once retries are exhausted.
    async fn snapshot(&self) -> Result<Vec<UpstreamEmployeeRecord>> {
        self.retry
            .call(
                "list_all",
                || self.source.list_all(),
                |_| Ok(Vec::new()),
            )
            .await
    }

    async fn find_by_id(&self, raw_id: &str) -> Result<UpstreamEmployeeRecord> {
        let id = parse_employee_id(raw_id)?;
        self.snapshot()
            .await?
            .into_iter()
            .find(|e| id.matches(e))
            .ok_or_else(|| FacadeError::NotFound {
                id: raw_id.to_string(),
            })
    }

    pub async fn list_employees(&self) -> Result<Vec<PublicEmployee>> {
        tracing::info!("Fetching all employees");
        let snapshot = self.snapshot().await?;
        Ok(snapshot.iter().map(translator::to_public_employee).collect())
    }

    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<PublicEmployee>> {
        tracing::info!("Searching employees with name containing: {}", fragment);
        let snapshot = self.snapshot().await?;
        Ok(aggregation::search_by_name(&snapshot, fragment)
            .into_iter()
            .map(translator::to_public_employee)
            .collect())
    }

    pub async fn get_employee_by_id(&self, raw_id: &str) -> Result<PublicEmployee> {
        tracing::info!("Fetching employee by ID: {}", raw_id);
        let record = self.find_by_id(raw_id).await?;
        Ok(translator::to_public_employee(&record))
    }

    pub async fn highest_salary(&self) -> Result<i64> {
        tracing::info!("Calculating highest salary among employees");
        let snapshot = self.snapshot().await?;
        Ok(aggregation::highest_salary(&snapshot))
    }

    pub async fn top_earner_names(&self) -> Result<Vec<String>> {
        tracing::info!("Fetching top {} highest earning employee names", TOP_EARNERS_LIMIT);
        let snapshot = self.snapshot().await?;
        Ok(aggregation::top_earner_names(&snapshot, TOP_EARNERS_LIMIT))
    }

    pub async fn create_employee(
        &self,
        input: Option<EmployeeCreationRequest>,
    ) -> Result<PublicEmployee> {
        let input = input.ok_or(FacadeError::NullInput)?;
        tracing::info!("Creating employee: {:?}", input);

        if let Err(failure) = validate_creation_request(&input) {
            tracing::error!("Employee input validation failed: {}", failure);
            return Err(failure.into());
        }

        let request = translator::to_upstream_creation(input)?;
        let created = self
            .retry
            .call("create", || self.source.create(request.clone()), Err)
            .await?;

        tracing::debug!("Upstream assigned ID {} to {}", created.id, created.name);
        Ok(translator::to_public_employee(&created))
    }

    /// Returns the deleted employee's name.
    pub async fn delete_employee_by_id(&self, raw_id: &str) -> Result<String> {
        tracing::info!("Deleting employee by ID: {}", raw_id);
        let record = self.find_by_id(raw_id).await?;
        let request = translator::to_upstream_deletion(&record);

        let deleted = self
            .retry
            .call("delete", || self.source.delete(request.clone()), Err)
            .await?;

        if !deleted {
            // Someone else removed it between our snapshot and the delete.
            tracing::warn!("Upstream reported nothing to delete for {}", record.name);
            return Err(FacadeError::NotFound {
                id: raw_id.to_string(),
            });
        }

        Ok(record.name)
    }
}
