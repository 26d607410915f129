//! Unified error handling for Storefront Core.
//!
//! Wraps domain and application errors into a single type carrying a
//! display category and user-actionable suggestions. Rule failures found
//! while validating a scope are NOT errors; they are recorded as
//! [`ConstraintViolation`](crate::domain::ConstraintViolation)s.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Storefront Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorefrontError {
    /// Errors from the domain layer (invalid values).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (collaborator failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl StorefrontError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StorefrontResult<T> = Result<T, StorefrontError>;
