//! Storefront Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for catalog
//! promotion scope validation and the administrative dashboard statistics.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         storefront-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Scope Validators               │
//! │ (ForProductsApi, ProductCatalog)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: SectionProvider, Products)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    storefront-adapters (Infrastructure) │
//! │ (UriSectionProvider, InMemoryProducts)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ScopeConfiguration, Violations, Stats) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use storefront_core::prelude::*;
//!
//! struct AdminApi;
//!
//! impl SectionProvider for AdminApi {
//!     fn section(&self) -> StorefrontResult<ApiContext> {
//!         Ok(ApiContext::ManagementFacing)
//!     }
//! }
//!
//! struct EmptyCatalog;
//!
//! impl ProductRepository for EmptyCatalog {
//!     fn find_one_by_code(&self, _code: &str) -> StorefrontResult<Option<Product>> {
//!         Ok(None)
//!     }
//! }
//!
//! let validator = ForProductsApiScopeValidator::new(
//!     Box::new(ProductCatalogScopeValidator::new(Box::new(EmptyCatalog))),
//!     Box::new(AdminApi),
//! );
//!
//! let mut context = ExecutionContext::new();
//! validator
//!     .validate(&ScopeConfiguration::new(), &CatalogPromotionScope, &mut context)
//!     .unwrap();
//! assert!(context.has_violations());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ForProductsApiScopeValidator, ProductCatalogScopeValidator, ScopeValidator,
        ports::{ProductRepository, SectionProvider},
    };
    pub use crate::domain::{
        ApiContext, CatalogPromotionScope, ChannelCode, ConstraintViolation,
        DashboardStatistics, ExecutionContext, Product, ProductCode, ScopeConfiguration,
    };
    pub use crate::error::{StorefrontError, StorefrontResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
