//! Base "for products" scope validator backed by the product catalog.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    application::{
        ports::ProductRepository,
        validators::{ScopeValidator, messages},
    },
    domain::{CatalogPromotionScope, ExecutionContext, PRODUCTS_KEY, ScopeConfiguration},
    error::StorefrontResult,
};

/// Checks that a scope lists products and that every listed code exists.
///
/// Stops at the first problem, so at most one violation is recorded per call.
pub struct ProductCatalogScopeValidator {
    products: Box<dyn ProductRepository>,
}

impl ProductCatalogScopeValidator {
    pub fn new(products: Box<dyn ProductRepository>) -> Self {
        Self { products }
    }

    fn add_invalid_products(context: &mut ExecutionContext, code: Option<&str>) {
        let builder = context
            .build_violation(messages::INVALID_PRODUCTS)
            .at_path(messages::PRODUCTS_PATH);

        match code {
            Some(code) => builder.set_parameter("{{ code }}", code).add_violation(),
            None => builder.add_violation(),
        }
    }
}

impl ScopeValidator for ProductCatalogScopeValidator {
    #[instrument(skip_all, fields(keys = configuration.len()))]
    fn validate(
        &self,
        configuration: &ScopeConfiguration,
        _constraint: &CatalogPromotionScope,
        context: &mut ExecutionContext,
    ) -> StorefrontResult<()> {
        let Some(products) = configuration.get_non_empty(PRODUCTS_KEY) else {
            context
                .build_violation(messages::PRODUCTS_NOT_EMPTY)
                .at_path(messages::PRODUCTS_PATH)
                .add_violation();
            return Ok(());
        };

        let Value::Array(entries) = products else {
            debug!("Products entry is not a list");
            Self::add_invalid_products(context, None);
            return Ok(());
        };

        for entry in entries {
            let Some(code) = entry.as_str() else {
                debug!(%entry, "Product entry is not a code");
                Self::add_invalid_products(context, None);
                return Ok(());
            };

            if self.products.find_one_by_code(code)?.is_none() {
                debug!(code, "Unknown product in scope");
                Self::add_invalid_products(context, Some(code));
                return Ok(());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::application::{ApplicationError, ports::MockProductRepository};
    use crate::domain::{Product, ProductCode};
    use crate::error::StorefrontError;

    fn product(code: &str) -> Product {
        Product::new(ProductCode::new(code).unwrap(), code.to_lowercase())
    }

    fn run(
        repository: MockProductRepository,
        configuration: &ScopeConfiguration,
    ) -> StorefrontResult<ExecutionContext> {
        let validator = ProductCatalogScopeValidator::new(Box::new(repository));
        let mut context = ExecutionContext::new();
        validator.validate(configuration, &CatalogPromotionScope, &mut context)?;
        Ok(context)
    }

    #[test]
    fn accepts_known_products() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_one_by_code()
            .withf(|code| code == "MUG")
            .times(1)
            .returning(|code| Ok(Some(product(code))));
        repository
            .expect_find_one_by_code()
            .withf(|code| code == "CAP")
            .times(1)
            .returning(|code| Ok(Some(product(code))));

        let configuration = ScopeConfiguration::new().with("products", json!(["MUG", "CAP"]));
        let context = run(repository, &configuration).unwrap();

        assert!(!context.has_violations());
    }

    #[test]
    fn requires_products() {
        let mut repository = MockProductRepository::new();
        repository.expect_find_one_by_code().never();

        let context = run(repository, &ScopeConfiguration::new()).unwrap();

        assert_eq!(context.violations().len(), 1);
        assert_eq!(
            context.violations()[0].message_key(),
            messages::PRODUCTS_NOT_EMPTY
        );
        assert_eq!(context.violations()[0].path(), messages::PRODUCTS_PATH);
    }

    #[test]
    fn reports_first_unknown_product_only() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_one_by_code()
            .withf(|code| code == "MUG")
            .times(1)
            .returning(|code| Ok(Some(product(code))));
        repository
            .expect_find_one_by_code()
            .withf(|code| code == "GHOST")
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_one_by_code()
            .withf(|code| code == "PHANTOM")
            .never();

        let configuration =
            ScopeConfiguration::new().with("products", json!(["MUG", "GHOST", "PHANTOM"]));
        let context = run(repository, &configuration).unwrap();

        assert_eq!(context.violations().len(), 1);
        let violation = &context.violations()[0];
        assert_eq!(violation.message_key(), messages::INVALID_PRODUCTS);
        assert_eq!(violation.path(), "configuration.products");
        assert_eq!(
            violation.parameters().get("{{ code }}").map(String::as_str),
            Some("GHOST")
        );
    }

    #[test]
    fn rejects_products_that_are_not_a_list() {
        let mut repository = MockProductRepository::new();
        repository.expect_find_one_by_code().never();

        let configuration = ScopeConfiguration::new().with("products", json!("MUG"));
        let context = run(repository, &configuration).unwrap();

        assert_eq!(
            context.violations()[0].message_key(),
            messages::INVALID_PRODUCTS
        );
    }

    #[test]
    fn rejects_non_string_entries() {
        let mut repository = MockProductRepository::new();
        repository.expect_find_one_by_code().never();

        let configuration = ScopeConfiguration::new().with("products", json!([42]));
        let context = run(repository, &configuration).unwrap();

        assert_eq!(context.violations().len(), 1);
        assert_eq!(
            context.violations()[0].message_key(),
            messages::INVALID_PRODUCTS
        );
    }

    #[test]
    fn repository_failures_propagate() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_one_by_code()
            .returning(|_| Err(ApplicationError::RepositoryLock.into()));

        let configuration = ScopeConfiguration::new().with("products", json!(["MUG"]));
        let result = run(repository, &configuration);

        assert!(matches!(
            result,
            Err(StorefrontError::Application(ApplicationError::RepositoryLock))
        ));
    }
}
