//! Infrastructure adapters for Storefront.
//!
//! This crate implements the ports defined in
//! `storefront-core::application::ports`. It contains all I/O.

pub mod product_repository;
pub mod scope_loader;
pub mod section;

// Re-export commonly used adapters
pub use product_repository::InMemoryProductRepository;
pub use scope_loader::ScopeConfigLoader;
pub use section::{SectionPrefixes, StaticSectionProvider, UriSectionProvider};
