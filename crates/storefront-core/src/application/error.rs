//! Application layer errors.
//!
//! These errors represent failing collaborators, not broken business
//! rules. Broken rules are violations on the execution context.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by collaborators and adapters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The API section of the current request could not be resolved.
    #[error("API section unavailable: {reason}")]
    SectionUnavailable { reason: String },

    /// Repository access failed (lock poisoned).
    #[error("Product repository lock poisoned")]
    RepositoryLock,

    /// A scope configuration file could not be read or parsed.
    #[error("Failed to load scope configuration from {path}: {reason}")]
    ConfigurationLoad { path: PathBuf, reason: String },

    /// A scope configuration file does not exist.
    #[error("Scope configuration not found: {path}")]
    ConfigurationNotFound { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SectionUnavailable { reason } => vec![
                format!("Section resolution failed: {}", reason),
                "Pass --section shop|admin|other to skip resolution".into(),
            ],
            Self::RepositoryLock => vec![
                "The product repository is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ConfigurationLoad { path, .. } => vec![
                format!("Check the contents of {}", path.display()),
                "Supported formats: .json, .toml".into(),
            ],
            Self::ConfigurationNotFound { path } => vec![
                format!("No file at {}", path.display()),
                "Check the path and try again".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SectionUnavailable { .. } => ErrorCategory::Configuration,
            Self::RepositoryLock => ErrorCategory::Internal,
            Self::ConfigurationLoad { .. } => ErrorCategory::Validation,
            Self::ConfigurationNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
