use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProductCode;

/// A catalog product as seen by scope validation.
///
/// Only the identity matters here; pricing and variants live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    code: ProductCode,
    name: String,
}

impl Product {
    pub fn new(code: ProductCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
