//! Catalog promotion scope configuration.
//!
//! A scope configuration is a free-form mapping supplied by the caller,
//! e.g. `{"products": ["MUG", "T_SHIRT"]}`. Validators only ever read it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// Key holding the product codes of a "for products" scope.
pub const PRODUCTS_KEY: &str = "products";

/// String-keyed mapping of arbitrary configuration values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeConfiguration(Map<String, Value>);

impl ScopeConfiguration {
    /// An empty configuration.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parse a configuration from JSON text. The top level must be an object.
    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidScopeConfiguration(e.to_string()))?;
        Self::try_from(value)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The value under `key`, unless it is absent or empty.
    ///
    /// See [`is_empty_value`] for what counts as empty.
    pub fn get_non_empty(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !is_empty_value(v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ScopeConfiguration {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for ScopeConfiguration {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DomainError::InvalidScopeConfiguration(format!(
                "expected an object at the top level, found {}",
                kind_of(&other)
            ))),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ScopeConfiguration {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Whether a configured value counts as empty.
///
/// `null`, `false`, `0`, `""`, `"0"`, `[]` and `{}` are empty; everything
/// else is not.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_object_configuration() {
        let config = ScopeConfiguration::from_json_str(r#"{"products": ["MUG"]}"#).unwrap();
        assert_eq!(config.len(), 1);
        assert_eq!(config.get(PRODUCTS_KEY), Some(&json!(["MUG"])));
    }

    #[test]
    fn rejects_non_object_top_level() {
        let err = ScopeConfiguration::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, DomainError::InvalidScopeConfiguration(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(ScopeConfiguration::from_json_str("{products").is_err());
    }

    #[test]
    fn empty_values() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!("0"),
            json!([]),
            json!({}),
        ] {
            assert!(is_empty_value(&value), "{value} should be empty");
        }

        for value in [json!(true), json!(1), json!("MUG"), json!(["MUG"]), json!({"a": 1})] {
            assert!(!is_empty_value(&value), "{value} should not be empty");
        }
    }

    #[test]
    fn get_non_empty_filters_blank_entries() {
        let config = ScopeConfiguration::new()
            .with("products", json!([]))
            .with("taxons", json!(["mugs"]));

        assert!(config.contains_key("products"));
        assert!(config.get_non_empty("products").is_none());
        assert!(config.get_non_empty("missing").is_none());
        assert_eq!(config.get_non_empty("taxons"), Some(&json!(["mugs"])));
    }

    #[test]
    fn serializes_transparently() {
        let config = ScopeConfiguration::new().with("products", json!(["MUG"]));
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"products": ["MUG"]})
        );
    }
}
