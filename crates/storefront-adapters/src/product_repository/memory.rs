//! In-memory product repository.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use storefront_core::{
    application::{ApplicationError, ports::ProductRepository},
    domain::{Product, ProductCode},
    error::StorefrontResult,
};

/// Thread-safe in-memory product catalog.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<HashMap<ProductCode, Product>>>,
}

impl InMemoryProductRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding one product per code, named after it.
    pub fn with_codes<I, S>(codes: I) -> StorefrontResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repository = Self::new();
        for code in codes {
            let code = ProductCode::new(code)?;
            let name = code.to_string();
            repository.insert(Product::new(code, name))?;
        }
        Ok(repository)
    }

    /// Insert or replace a product.
    pub fn insert(&self, product: Product) -> StorefrontResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::RepositoryLock)?;
        inner.insert(product.code().clone(), product);
        Ok(())
    }

    /// Get the number of products.
    pub fn len(&self) -> StorefrontResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::RepositoryLock)?;
        Ok(inner.len())
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> StorefrontResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_one_by_code(&self, code: &str) -> StorefrontResult<Option<Product>> {
        // Invalid codes can never have been inserted
        let Ok(code) = ProductCode::new(code) else {
            return Ok(None);
        };

        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::RepositoryLock)?;

        Ok(inner.get(&code).cloned())
    }
}
