//! Constraint violations and the context that collects them.
//!
//! Validators never fail because a rule is broken. They record a
//! [`ConstraintViolation`] on the [`ExecutionContext`] they were handed and
//! return normally.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A failed validation rule: a message key and the field it is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    message_key: String,
    path: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    parameters: BTreeMap<String, String>,
}

impl ConstraintViolation {
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Property path the violation is attached to; empty for the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message_key)
        } else {
            write!(f, "{}: {}", self.path, self.message_key)
        }
    }
}

/// Collects the violations raised during one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    violations: Vec<ConstraintViolation>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a violation for `message_key`.
    ///
    /// Nothing is recorded until [`ConstraintViolationBuilder::add_violation`]
    /// is called.
    pub fn build_violation(&mut self, message_key: impl Into<String>) -> ConstraintViolationBuilder<'_> {
        ConstraintViolationBuilder {
            context: self,
            message_key: message_key.into(),
            path: String::new(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn violations(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<ConstraintViolation> {
        self.violations
    }
}

/// Fluent builder returned by [`ExecutionContext::build_violation`].
#[must_use = "a violation is only recorded once `add_violation` is called"]
pub struct ConstraintViolationBuilder<'a> {
    context: &'a mut ExecutionContext,
    message_key: String,
    path: String,
    parameters: BTreeMap<String, String>,
}

impl ConstraintViolationBuilder<'_> {
    /// Attach the violation to a property path, e.g. `configuration.products`.
    pub fn at_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set a message parameter, e.g. `{{ code }}`.
    pub fn set_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Record the violation on the owning context.
    pub fn add_violation(self) {
        self.context.violations.push(ConstraintViolation {
            message_key: self.message_key,
            path: self.path,
            parameters: self.parameters,
        });
    }
}
