//! Core domain layer for Storefront.
//!
//! Pure business values with no I/O. Collaborators (section resolution,
//! product lookup) are reached through ports defined in the application
//! layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or repository calls
//! - **Immutable values**: snapshots and configurations are `Clone + PartialEq`

pub mod error;
pub mod product;
pub mod scope_configuration;
pub mod statistics;
pub mod value_objects;
pub mod violation;

pub use error::DomainError;
pub use product::Product;
pub use scope_configuration::{PRODUCTS_KEY, ScopeConfiguration, is_empty_value};
pub use statistics::DashboardStatistics;
pub use value_objects::{ApiContext, CatalogPromotionScope, ChannelCode, ProductCode};
pub use violation::{ConstraintViolation, ConstraintViolationBuilder, ExecutionContext};
