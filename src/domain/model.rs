use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An employee as the upstream source stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamEmployeeRecord {
    pub id: Uuid,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: i64,
    #[serde(rename = "employee_age")]
    pub age: i32,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(rename = "employee_email")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamCreationRequest {
    pub name: String,
    pub salary: i64,
    pub age: i32,
    pub title: String,
}

/// The upstream deletes by name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamDeletionRequest {
    pub name: String,
}

/// Envelope the upstream wraps every payload in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Employee as returned to callers of the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicEmployee {
    pub id: Uuid,
    pub name: String,
    pub salary: i64,
    pub age: i32,
    pub title: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Caller input for a new employee. Fields stay optional so that a missing
/// value is reported by validation instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreationRequest {
    pub name: Option<String>,
    pub salary: Option<i64>,
    pub age: Option<i32>,
    pub title: Option<String>,
}

impl EmployeeCreationRequest {
    pub fn new(name: impl Into<String>, salary: i64, age: i32, title: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            salary: Some(salary),
            age: Some(age),
            title: Some(title.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn matches(&self, record: &UpstreamEmployeeRecord) -> bool {
        self.0 == record.id
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
