//! Filesystem-based scope configuration loader.
//!
//! Reads a catalog promotion scope configuration from disk. The format is
//! picked from the file extension:
//!
//! ```text
//! scope.json   {"products": ["MUG", "CAP"]}
//! scope.toml   products = ["MUG", "CAP"]
//! ```
//!
//! Files without a recognised extension are parsed as JSON.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{debug, instrument};

use storefront_core::{
    application::ApplicationError, domain::ScopeConfiguration, error::StorefrontResult,
};

/// Loads [`ScopeConfiguration`]s from files.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScopeConfigLoader;

impl ScopeConfigLoader {
    /// Read and parse the file at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> StorefrontResult<ScopeConfiguration> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ApplicationError::ConfigurationNotFound {
                path: path.to_path_buf(),
            },
            _ => load_error(path, e),
        })?;

        let value = match extension(path).as_deref() {
            Some("toml") => parse_toml(path, &raw)?,
            _ => serde_json::from_str::<Value>(&raw).map_err(|e| load_error(path, e))?,
        };

        let configuration =
            ScopeConfiguration::try_from(value).map_err(|e| load_error(path, e))?;

        debug!(keys = configuration.len(), "Loaded scope configuration");
        Ok(configuration)
    }
}

fn parse_toml(path: &Path, raw: &str) -> Result<Value, ApplicationError> {
    let table: toml::Table = toml::from_str(raw).map_err(|e| load_error(path, e))?;
    serde_json::to_value(table).map_err(|e| load_error(path, e))
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

fn load_error(path: &Path, reason: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::ConfigurationLoad {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use storefront_core::error::StorefrontError;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "scope.json", r#"{"products": ["MUG", "CAP"]}"#);

        let config = ScopeConfigLoader::load(&path).unwrap();
        assert_eq!(config.get("products"), Some(&json!(["MUG", "CAP"])));
    }

    #[test]
    fn loads_toml() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "scope.TOML", "products = [\"MUG\"]\n");

        let config = ScopeConfigLoader::load(&path).unwrap();
        assert_eq!(config.get("products"), Some(&json!(["MUG"])));
    }

    #[test]
    fn unknown_extension_is_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "scope.conf", "{}");

        assert!(ScopeConfigLoader::load(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = ScopeConfigLoader::load(dir.path().join("absent.json"));

        assert!(matches!(
            result,
            Err(StorefrontError::Application(
                ApplicationError::ConfigurationNotFound { .. }
            ))
        ));
    }

    #[test]
    fn non_object_json_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "scope.json", r#"["MUG"]"#);

        let err = ScopeConfigLoader::load(&path).unwrap_err();
        assert!(matches!(
            err,
            StorefrontError::Application(ApplicationError::ConfigurationLoad { .. })
        ));
        assert!(err.to_string().contains("top level"));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "scope.toml", "products = [");

        assert!(ScopeConfigLoader::load(&path).is_err());
    }
}
