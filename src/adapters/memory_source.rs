use crate::core::{
    EmployeeSource, UpstreamCreationRequest, UpstreamDeletionRequest, UpstreamEmployeeRecord,
};
use crate::utils::error::{FacadeError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process employee source for local runs and tests.
///
/// Clones share the same records. `fail_next` makes the following calls
/// report a rate-limit failure, the way the real upstream does under load.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeSource {
    employees: Arc<RwLock<Vec<UpstreamEmployeeRecord>>>,
    pending_failures: Arc<AtomicU32>,
}

impl InMemoryEmployeeSource {
    pub fn new(employees: Vec<UpstreamEmployeeRecord>) -> Self {
        Self {
            employees: Arc::new(RwLock::new(employees)),
            pending_failures: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn seeded() -> Self {
        let seed = [
            ("Swapnil Patil", 100000, 30, "Developer"),
            ("Prerana Patil", 200000, 28, "Lead"),
            ("Amay Sharma", 70000, 32, "Engineer"),
            ("Rohan Borse", 90000, 40, "Manager"),
            ("Meera Iyer", 120000, 35, "Architect"),
        ];

        Self::new(
            seed.into_iter()
                .map(|(name, salary, age, title)| {
                    new_record(UpstreamCreationRequest {
                        name: name.to_string(),
                        salary,
                        age,
                        title: title.to_string(),
                    })
                })
                .collect(),
        )
    }

    /// The next `count` calls fail transiently.
    pub fn fail_next(&self, count: u32) {
        self.pending_failures.store(count, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.employees.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.employees.read().await.is_empty()
    }

    fn check_rate_limit(&self) -> Result<()> {
        let limited = self
            .pending_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();

        if limited {
            tracing::debug!("Simulating upstream rate limit");
            return Err(FacadeError::transient("429 Too Many Requests"));
        }
        Ok(())
    }
}

fn email_for(name: &str) -> String {
    let local: Vec<String> = name
        .split_whitespace()
        .map(|part| part.to_lowercase())
        .collect();
    format!("{}@company.com", local.join("."))
}

fn new_record(request: UpstreamCreationRequest) -> UpstreamEmployeeRecord {
    UpstreamEmployeeRecord {
        id: Uuid::new_v4(),
        email: email_for(&request.name),
        name: request.name,
        salary: request.salary,
        age: request.age,
        title: request.title,
    }
}

#[async_trait]
impl EmployeeSource for InMemoryEmployeeSource {
    async fn list_all(&self) -> Result<Vec<UpstreamEmployeeRecord>> {
        self.check_rate_limit()?;
        Ok(self.employees.read().await.clone())
    }

    async fn create(&self, request: UpstreamCreationRequest) -> Result<UpstreamEmployeeRecord> {
        self.check_rate_limit()?;
        let record = new_record(request);
        self.employees.write().await.push(record.clone());
        Ok(record)
    }

    /// Removes the first employee carrying the name.
    async fn delete(&self, request: UpstreamDeletionRequest) -> Result<bool> {
        self.check_rate_limit()?;
        let mut employees = self.employees.write().await;
        match employees.iter().position(|e| e.name == request.name) {
            Some(index) => {
                employees.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
