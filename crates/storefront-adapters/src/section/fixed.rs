use storefront_core::{application::ports::SectionProvider, domain::ApiContext, error::StorefrontResult};

/// Section provider that always answers the same section.
///
/// Used when the caller already knows which API it is acting for, e.g. the
/// CLI's `--section` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticSectionProvider {
    section: ApiContext,
}

impl StaticSectionProvider {
    pub fn new(section: ApiContext) -> Self {
        Self { section }
    }
}

impl SectionProvider for StaticSectionProvider {
    fn section(&self) -> StorefrontResult<ApiContext> {
        Ok(self.section)
    }
}
