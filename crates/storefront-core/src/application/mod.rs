//! Application layer for Storefront.
//!
//! This layer contains:
//! - **Validators**: scope rules (`ForProductsApiScopeValidator`,
//!   `ProductCatalogScopeValidator`) behind the [`ScopeValidator`] seam
//! - **Ports**: interface definitions (traits) for external collaborators
//! - **Errors**: collaborator failures
//!
//! Rule outcomes are written to an
//! [`ExecutionContext`](crate::domain::ExecutionContext); only collaborator
//! faults travel through `Err`.

pub mod error;
pub mod ports;
pub mod validators;

pub use validators::{
    ForProductsApiScopeValidator, ProductCatalogScopeValidator, ScopeValidator, messages,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ProductRepository, SectionProvider};

pub use error::ApplicationError;
