use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Value Errors
    // ========================================================================
    #[error("Invalid {kind} code: '{value}'")]
    InvalidCode { kind: &'static str, value: String },

    #[error("Unknown API section: '{0}'")]
    UnknownSection(String),

    #[error("Count '{field}' must not be negative (got {value})")]
    NegativeCount { field: &'static str, value: i64 },

    // ========================================================================
    // Scope Configuration Errors
    // ========================================================================
    #[error("Invalid scope configuration: {0}")]
    InvalidScopeConfiguration(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidCode { kind, .. } => vec![
                format!("A {} code must not be blank", kind),
                "Codes may contain letters, digits, '-', '_' and '.'".into(),
            ],
            Self::UnknownSection(_) => vec![
                "Known sections: shop, admin, other".into(),
            ],
            Self::NegativeCount { field, .. } => vec![
                format!("'{}' counts entities and cannot be below zero", field),
            ],
            Self::InvalidScopeConfiguration(msg) => vec![
                "A scope configuration must be a JSON object".into(),
                format!("Details: {}", msg),
                "Example: {\"products\": [\"MUG\", \"T_SHIRT\"]}".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCode { .. }
            | Self::UnknownSection(_)
            | Self::NegativeCount { .. }
            | Self::InvalidScopeConfiguration(_) => ErrorCategory::Validation,
        }
    }
}
