//! "For products" scope rule for API requests.
//!
//! Shop API requests are handed to the base validator untouched. Every
//! other request must declare a non-empty product list, and is never
//! delegated.

use tracing::{debug, instrument};

use crate::{
    application::{
        ports::SectionProvider,
        validators::{ScopeValidator, messages},
    },
    domain::{ApiContext, CatalogPromotionScope, ExecutionContext, PRODUCTS_KEY, ScopeConfiguration},
    error::StorefrontResult,
};

/// Section-aware "for products" scope validator.
pub struct ForProductsApiScopeValidator {
    base: Box<dyn ScopeValidator>,
    sections: Box<dyn SectionProvider>,
}

impl ForProductsApiScopeValidator {
    /// Wrap `base`, consulting `sections` on every call.
    pub fn new(base: Box<dyn ScopeValidator>, sections: Box<dyn SectionProvider>) -> Self {
        Self { base, sections }
    }
}

impl ScopeValidator for ForProductsApiScopeValidator {
    #[instrument(skip_all, fields(keys = configuration.len()))]
    fn validate(
        &self,
        configuration: &ScopeConfiguration,
        constraint: &CatalogPromotionScope,
        context: &mut ExecutionContext,
    ) -> StorefrontResult<()> {
        let section = self.sections.section()?;

        match section {
            ApiContext::ShopFacing => {
                debug!(%section, "Delegating to base scope validator");
                self.base.validate(configuration, constraint, context)
            }
            ApiContext::ManagementFacing | ApiContext::Other => {
                if configuration.get_non_empty(PRODUCTS_KEY).is_none() {
                    debug!(%section, "Scope declares no products");
                    context
                        .build_violation(messages::PRODUCTS_NOT_EMPTY)
                        .at_path(messages::PRODUCTS_PATH)
                        .add_violation();
                }

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockall::predicate::eq;
    use serde_json::json;

    use crate::application::{
        ApplicationError, ports::MockSectionProvider, validators::MockScopeValidator,
    };
    use crate::error::StorefrontError;

    fn sections_returning(section: ApiContext) -> MockSectionProvider {
        let mut sections = MockSectionProvider::new();
        sections.expect_section().times(1).returning(move || Ok(section));
        sections
    }

    fn base_never_called() -> MockScopeValidator {
        let mut base = MockScopeValidator::new();
        base.expect_validate().never();
        base
    }

    fn assert_single_not_empty_violation(context: &ExecutionContext) {
        assert_eq!(context.violations().len(), 1);
        let violation = &context.violations()[0];
        assert_eq!(
            violation.message_key(),
            "sylius.catalog_promotion_scope.for_products.not_empty"
        );
        assert_eq!(violation.path(), "configuration.products");
    }

    #[test]
    fn falls_back_to_base_validator_in_shop_section() {
        let mut base = MockScopeValidator::new();
        base.expect_validate()
            .with(
                eq(ScopeConfiguration::new()),
                eq(CatalogPromotionScope),
                eq(ExecutionContext::new()),
            )
            .times(1)
            .returning(|_, _, _| Ok(()));

        let validator = ForProductsApiScopeValidator::new(
            Box::new(base),
            Box::new(sections_returning(ApiContext::ShopFacing)),
        );

        let mut context = ExecutionContext::new();
        validator
            .validate(&ScopeConfiguration::new(), &CatalogPromotionScope, &mut context)
            .unwrap();

        assert!(!context.has_violations());
    }

    #[test]
    fn shop_section_delegates_whatever_the_configuration() {
        let configuration = ScopeConfiguration::new().with("products", json!([]));

        let mut base = MockScopeValidator::new();
        base.expect_validate()
            .withf(|config, _, _| config.get("products") == Some(&json!([])))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let validator = ForProductsApiScopeValidator::new(
            Box::new(base),
            Box::new(sections_returning(ApiContext::ShopFacing)),
        );

        let mut context = ExecutionContext::new();
        validator
            .validate(&configuration, &CatalogPromotionScope, &mut context)
            .unwrap();

        assert!(!context.has_violations());
    }

    #[test]
    fn adds_violation_when_products_key_is_missing() {
        let validator = ForProductsApiScopeValidator::new(
            Box::new(base_never_called()),
            Box::new(sections_returning(ApiContext::ManagementFacing)),
        );

        let mut context = ExecutionContext::new();
        validator
            .validate(&ScopeConfiguration::new(), &CatalogPromotionScope, &mut context)
            .unwrap();

        assert_single_not_empty_violation(&context);
    }

    #[test]
    fn adds_violation_when_products_list_is_empty() {
        let validator = ForProductsApiScopeValidator::new(
            Box::new(base_never_called()),
            Box::new(sections_returning(ApiContext::ManagementFacing)),
        );

        let configuration = ScopeConfiguration::new().with("products", json!([]));
        let mut context = ExecutionContext::new();
        validator
            .validate(&configuration, &CatalogPromotionScope, &mut context)
            .unwrap();

        assert_single_not_empty_violation(&context);
    }

    #[test]
    fn does_nothing_when_scope_is_valid() {
        let validator = ForProductsApiScopeValidator::new(
            Box::new(base_never_called()),
            Box::new(sections_returning(ApiContext::ManagementFacing)),
        );

        let configuration = ScopeConfiguration::new().with("products", json!(["product"]));
        let mut context = ExecutionContext::new();
        validator
            .validate(&configuration, &CatalogPromotionScope, &mut context)
            .unwrap();

        assert!(!context.has_violations());
    }

    #[test]
    fn other_sections_are_inspected_like_admin() {
        let validator = ForProductsApiScopeValidator::new(
            Box::new(base_never_called()),
            Box::new(sections_returning(ApiContext::Other)),
        );

        let configuration = ScopeConfiguration::new().with("products", json!(null));
        let mut context = ExecutionContext::new();
        validator
            .validate(&configuration, &CatalogPromotionScope, &mut context)
            .unwrap();

        assert_single_not_empty_violation(&context);
    }

    #[test]
    fn section_failures_propagate_unchanged() {
        let mut sections = MockSectionProvider::new();
        sections.expect_section().times(1).returning(|| {
            Err(ApplicationError::SectionUnavailable {
                reason: "no request".into(),
            }
            .into())
        });

        let validator =
            ForProductsApiScopeValidator::new(Box::new(base_never_called()), Box::new(sections));

        let mut context = ExecutionContext::new();
        let err = validator
            .validate(&ScopeConfiguration::new(), &CatalogPromotionScope, &mut context)
            .unwrap_err();

        assert_eq!(
            err,
            StorefrontError::Application(ApplicationError::SectionUnavailable {
                reason: "no request".into(),
            })
        );
        assert!(!context.has_violations());
    }

    #[test]
    fn base_validator_failures_propagate_unchanged() {
        let mut base = MockScopeValidator::new();
        base.expect_validate()
            .times(1)
            .returning(|_, _, _| Err(ApplicationError::RepositoryLock.into()));

        let validator = ForProductsApiScopeValidator::new(
            Box::new(base),
            Box::new(sections_returning(ApiContext::ShopFacing)),
        );

        let mut context = ExecutionContext::new();
        let result =
            validator.validate(&ScopeConfiguration::new(), &CatalogPromotionScope, &mut context);

        assert_eq!(
            result,
            Err(StorefrontError::Application(ApplicationError::RepositoryLock))
        );
    }
}
