//! Product Domain Ports
//!
//! The catalog owns ranking: implementations return matches in their own
//! order and callers must not re-sort them.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError};

use crate::criteria::ProductSearchCriteria;
use crate::product::Product;

/// Search access to the product catalog
#[async_trait]
pub trait ProductCatalog: DomainPort + HealthCheckable {
    /// Returns every product matching the criteria, in catalog order
    ///
    /// An empty result is not an error.
    async fn search_products(
        &self,
        criteria: &ProductSearchCriteria,
    ) -> Result<Vec<Product>, PortError>;
}

/// Mock implementation of ProductCatalog for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use core_kernel::HealthCheckResult;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// In-memory catalog that records every search it serves
    #[derive(Debug, Default)]
    pub struct MockProductCatalog {
        products: Vec<Product>,
        searches: Mutex<Vec<ProductSearchCriteria>>,
        unavailable: AtomicBool,
    }

    impl MockProductCatalog {
        /// Creates an empty catalog
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a catalog holding the given products, in order
        pub fn with_products(products: Vec<Product>) -> Self {
            Self {
                products,
                ..Default::default()
            }
        }

        /// Makes every subsequent search fail as if the catalog were down
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        /// Criteria of every search served so far
        pub fn searches(&self) -> Vec<ProductSearchCriteria> {
            self.searches
                .lock()
                .map(|s| s.clone())
                .unwrap_or_default()
        }
    }

    impl DomainPort for MockProductCatalog {}

    #[async_trait]
    impl HealthCheckable for MockProductCatalog {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-product-catalog")
        }
    }

    #[async_trait]
    impl ProductCatalog for MockProductCatalog {
        async fn search_products(
            &self,
            criteria: &ProductSearchCriteria,
        ) -> Result<Vec<Product>, PortError> {
            if let Ok(mut searches) = self.searches.lock() {
                searches.push(criteria.clone());
            }
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(PortError::unavailable("product catalog"));
            }
            Ok(self
                .products
                .iter()
                .filter(|p| criteria.matches(p))
                .cloned()
                .collect())
        }
    }
}
