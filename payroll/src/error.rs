//! Unified error types for the payroll example
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business rule violations
//! - `AppError`: Application layer errors (wraps domain errors, adds configuration failures)

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A value was rejected by a business rule, e.g. a negative salary
    #[error("{0}")]
    InvalidInput(String),
}

impl DomainError {
    /// The error raised when an employee's salary fails validation
    pub fn invalid_salary() -> Self {
        DomainError::InvalidInput("Invalid salary.".to_string())
    }
}

/// Application layer errors - used by the config layer and the binary
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}
