//! Driven (output) ports - implemented by infrastructure.
//!
//! The `storefront-adapters` crate provides implementations.

use crate::domain::{ApiContext, Product};
use crate::error::StorefrontResult;

/// Port for resolving the API section of the current request.
///
/// Implemented by:
/// - `storefront_adapters::section::StaticSectionProvider` (fixed section)
/// - `storefront_adapters::section::UriSectionProvider` (request path prefixes)
///
/// Called once per validation; the answer is never cached by callers.
#[cfg_attr(test, mockall::automock)]
pub trait SectionProvider: Send + Sync {
    fn section(&self) -> StorefrontResult<ApiContext>;
}

/// Port for product lookup.
///
/// Implemented by:
/// - `storefront_adapters::product_repository::InMemoryProductRepository`
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Find a product by its code; `Ok(None)` when no such product exists.
    fn find_one_by_code(&self, code: &str) -> StorefrontResult<Option<Product>>;
}
