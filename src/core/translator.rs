//! Mappings between the upstream record shapes and the public ones.

use crate::core::validator::ValidationFailure;
use crate::domain::model::{
    EmployeeCreationRequest, PublicEmployee, UpstreamCreationRequest, UpstreamDeletionRequest,
    UpstreamEmployeeRecord,
};

pub fn to_public_employee(record: &UpstreamEmployeeRecord) -> PublicEmployee {
    PublicEmployee {
        id: record.id,
        name: record.name.clone(),
        salary: record.salary,
        age: record.age,
        title: record.title.clone(),
        email: record.email.clone(),
        error: None,
    }
}

/// Expects a request that already passed validation; a missing field is
/// still reported rather than defaulted.
pub fn to_upstream_creation(
    request: EmployeeCreationRequest,
) -> Result<UpstreamCreationRequest, ValidationFailure> {
    Ok(UpstreamCreationRequest {
        name: request.name.ok_or(ValidationFailure::NameBlank)?,
        salary: request.salary.ok_or(ValidationFailure::SalaryMissing)?,
        age: request.age.ok_or(ValidationFailure::AgeMissing)?,
        title: request.title.ok_or(ValidationFailure::TitleBlank)?,
    })
}

pub fn to_upstream_deletion(record: &UpstreamEmployeeRecord) -> UpstreamDeletionRequest {
    UpstreamDeletionRequest {
        name: record.name.clone(),
    }
}
