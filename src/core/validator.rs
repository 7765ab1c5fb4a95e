use crate::domain::model::EmployeeCreationRequest;
use std::fmt;

pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 75;

/// First rule an [`EmployeeCreationRequest`] breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    NameBlank,
    SalaryMissing,
    SalaryNotPositive,
    AgeMissing,
    AgeBelowMinimum,
    AgeAboveMaximum,
    TitleBlank,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ValidationFailure::NameBlank => "Employee name is blank.",
            ValidationFailure::SalaryMissing => "Employee salary is missing.",
            ValidationFailure::SalaryNotPositive => "Employee salary must be positive.",
            ValidationFailure::AgeMissing => "Employee age is missing.",
            ValidationFailure::AgeBelowMinimum => "Employee age must be at least 16.",
            ValidationFailure::AgeAboveMaximum => "Employee age must not be greater than 75.",
            ValidationFailure::TitleBlank => "Employee title is blank.",
        };
        f.write_str(reason)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Checks rules in a fixed order and stops at the first one broken.
pub fn validate_creation_request(
    request: &EmployeeCreationRequest,
) -> Result<(), ValidationFailure> {
    if is_blank(request.name.as_deref()) {
        return Err(ValidationFailure::NameBlank);
    }

    match request.salary {
        None => return Err(ValidationFailure::SalaryMissing),
        Some(salary) if salary <= 0 => return Err(ValidationFailure::SalaryNotPositive),
        Some(_) => {}
    }

    match request.age {
        None => return Err(ValidationFailure::AgeMissing),
        Some(age) if age < MIN_AGE => return Err(ValidationFailure::AgeBelowMinimum),
        Some(age) if age > MAX_AGE => return Err(ValidationFailure::AgeAboveMaximum),
        Some(_) => {}
    }

    if is_blank(request.title.as_deref()) {
        return Err(ValidationFailure::TitleBlank);
    }

    Ok(())
}
