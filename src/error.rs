//! Error types for the address book service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The store itself never fails; these errors come from input validation and startup.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by the contact service before any store operation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Search query is empty or blank
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// A value failed domain validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
