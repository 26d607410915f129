//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `STOREFRONT_` prefix, `__` between sections
//!    (`STOREFRONT_SECTIONS__SHOP_PREFIX=/store`)
//! 3. Config file (`--config FILE`, else the default location if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use storefront_adapters::SectionPrefixes;

/// Application configuration.
///
/// Every table falls back to its defaults, so a partial file (or none at
/// all) still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API section prefixes used to resolve `--uri`.
    pub sections: SectionConfig,
    /// Product catalog available to scope validation.
    pub catalog: CatalogConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub shop_prefix: String,
    pub admin_prefix: String,
}

impl Default for SectionConfig {
    fn default() -> Self {
        let prefixes = SectionPrefixes::default();
        Self {
            shop_prefix: prefixes.shop,
            admin_prefix: prefixes.admin,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub products: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let default_path = Self::config_path();
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(default_path.as_path()).required(false),
        };

        Self::builder(file)?
            .add_source(
                Environment::with_prefix("STOREFRONT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("catalog.products"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Load from defaults and a single file only (no environment).
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        Self::builder(File::from(path).required(true))?
            .build()
            .with_context(|| format!("Failed to read {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    fn builder(
        file: impl config::Source + Send + Sync + 'static,
    ) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;
        Ok(Config::builder().add_source(defaults).add_source(file))
    }

    /// Section prefixes as understood by the URI section provider.
    pub fn section_prefixes(&self) -> SectionPrefixes {
        SectionPrefixes {
            shop: self.sections.shop_prefix.clone(),
            admin: self.sections.admin_prefix.clone(),
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.storefront.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".storefront.toml"))
    }
}
