//! Section provider adapters.

mod fixed;
mod uri;

pub use fixed::StaticSectionProvider;
pub use uri::{SectionPrefixes, UriSectionProvider};
