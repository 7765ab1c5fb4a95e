use crate::core::validator::ValidationFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacadeError {
    #[error("Employee input is null")]
    NullInput,

    #[error("{0}")]
    ValidationFailed(ValidationFailure),

    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("Invalid employee ID format")]
    InvalidIdentifierFormat { value: String },

    #[error("Employee not found for ID {id}")]
    NotFound { id: String },

    #[error("Upstream temporarily unavailable: {message}")]
    UpstreamTransientFailure { message: String },

    #[error("Upstream request failed: {message}")]
    UpstreamUnexpectedFailure { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FacadeError {
    /// Only transient upstream failures are worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, FacadeError::UpstreamTransientFailure { .. })
    }

    pub fn transient(message: impl Into<String>) -> Self {
        FacadeError::UpstreamTransientFailure {
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        FacadeError::UpstreamUnexpectedFailure {
            message: message.into(),
        }
    }
}

impl From<ValidationFailure> for FacadeError {
    fn from(failure: ValidationFailure) -> Self {
        FacadeError::ValidationFailed(failure)
    }
}

pub type Result<T> = std::result::Result<T, FacadeError>;
