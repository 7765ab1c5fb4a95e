use crate::domain::model::EmployeeId;
use crate::utils::error::{FacadeError, Result};
use uuid::fmt::Hyphenated;
use uuid::Uuid;

/// Checks syntax only; whether the employee exists is decided against a snapshot.
///
/// Only the hyphenated 8-4-4-4-12 form is accepted, in either letter case.
/// The simple, braced and URN forms are rejected.
pub fn parse_employee_id(raw: &str) -> Result<EmployeeId> {
    let invalid = || FacadeError::InvalidIdentifierFormat {
        value: raw.to_string(),
    };

    if raw.len() != Hyphenated::LENGTH {
        return Err(invalid());
    }
    Uuid::parse_str(raw).map(EmployeeId::new).map_err(|_| invalid())
}
