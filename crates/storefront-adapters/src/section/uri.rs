//! Request-path based section resolution.
//!
//! A request belongs to the shop API when its path starts with the shop
//! prefix (`/api/v2/shop` by default), to the admin API when it starts with
//! the admin prefix, and to neither otherwise. Prefixes match whole path
//! segments: `/api/v2/shopping` is not under `/api/v2/shop`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use storefront_core::{
    application::{ApplicationError, ports::SectionProvider},
    domain::ApiContext,
    error::StorefrontResult,
};

/// Path prefixes of the two API surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPrefixes {
    pub shop: String,
    pub admin: String,
}

impl Default for SectionPrefixes {
    fn default() -> Self {
        Self {
            shop: "/api/v2/shop".into(),
            admin: "/api/v2/admin".into(),
        }
    }
}

/// Classifies the request path it was built with.
#[derive(Debug, Clone)]
pub struct UriSectionProvider {
    prefixes: SectionPrefixes,
    path: String,
}

impl UriSectionProvider {
    pub fn new(prefixes: SectionPrefixes, path: impl Into<String>) -> Self {
        Self {
            prefixes,
            path: path.into(),
        }
    }

    /// Classify `path` against `prefixes` without building a provider.
    pub fn classify(prefixes: &SectionPrefixes, path: &str) -> ApiContext {
        // Query string and fragment never decide the section
        let path = path.split(['?', '#']).next().unwrap_or_default();

        if has_segment_prefix(path, &prefixes.shop) {
            ApiContext::ShopFacing
        } else if has_segment_prefix(path, &prefixes.admin) {
            ApiContext::ManagementFacing
        } else {
            ApiContext::Other
        }
    }
}

impl SectionProvider for UriSectionProvider {
    fn section(&self) -> StorefrontResult<ApiContext> {
        if !self.path.starts_with('/') {
            return Err(ApplicationError::SectionUnavailable {
                reason: format!("request path '{}' is not absolute", self.path),
            }
            .into());
        }

        let section = Self::classify(&self.prefixes, &self.path);
        trace!(path = %self.path, %section, "Resolved API section");
        Ok(section)
    }
}

fn has_segment_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return false;
    }

    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
