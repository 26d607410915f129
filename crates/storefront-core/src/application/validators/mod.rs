//! Catalog promotion scope validators.
//!
//! Each validator inspects a [`ScopeConfiguration`] and records violations
//! on the [`ExecutionContext`]. Validators compose: the API-facing rule wraps
//! a base validator and decides per request whether to delegate to it.

pub mod for_products_api;
pub mod product_catalog;

pub use for_products_api::ForProductsApiScopeValidator;
pub use product_catalog::ProductCatalogScopeValidator;

use crate::domain::{CatalogPromotionScope, ExecutionContext, ScopeConfiguration};
use crate::error::StorefrontResult;

/// A validator for one kind of catalog promotion scope.
///
/// `Err` is reserved for collaborator failures; a broken rule is reported
/// through `context` and the call still returns `Ok(())`.
#[cfg_attr(test, mockall::automock)]
pub trait ScopeValidator: Send + Sync {
    fn validate(
        &self,
        configuration: &ScopeConfiguration,
        constraint: &CatalogPromotionScope,
        context: &mut ExecutionContext,
    ) -> StorefrontResult<()>;
}

/// Message keys and property paths of scope violations.
///
/// Translation catalogs are keyed on these, so they must not change.
pub mod messages {
    pub const PRODUCTS_NOT_EMPTY: &str = "sylius.catalog_promotion_scope.for_products.not_empty";
    pub const INVALID_PRODUCTS: &str =
        "sylius.catalog_promotion_scope.for_products.invalid_products";

    pub const PRODUCTS_PATH: &str = "configuration.products";
}
