//! Application ports (traits) for external collaborators.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the validators, implemented by
//!   `storefront-adapters`
//!   - `SectionProvider`: which API surface issued the request
//!   - `ProductRepository`: product lookup by code

pub mod output;

pub use output::{ProductRepository, SectionProvider};

#[cfg(test)]
pub use output::{MockProductRepository, MockSectionProvider};
