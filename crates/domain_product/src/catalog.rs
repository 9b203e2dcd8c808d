//! JSON-backed product catalog
//!
//! The catalog is a JSON array of products. A copy ships inside the binary
//! and a replacement file can be supplied at startup.

use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, info};

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError};

use crate::criteria::ProductSearchCriteria;
use crate::error::ProductError;
use crate::ports::ProductCatalog;
use crate::product::Product;

const EMBEDDED_CATALOG: &str = include_str!("../data/products.json");

/// Product catalog loaded once and searched in memory
#[derive(Debug, Clone)]
pub struct ProductReference {
    products: Vec<Product>,
}

impl ProductReference {
    /// Creates a catalog from already-parsed products, keeping their order
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parses a catalog from a JSON array
    pub fn from_json(json: &str) -> Result<Self, ProductError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| ProductError::catalog_load("json", e))?;
        Ok(Self::new(products))
    }

    /// Returns the catalog compiled into the binary
    pub fn embedded() -> Result<Self, ProductError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Reads a catalog file
    ///
    /// # Errors
    ///
    /// Returns `ProductError::CatalogLoad` if the file cannot be read or is
    /// not a JSON array of products
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ProductError> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ProductError::catalog_load(source_name.clone(), e))?;
        let products: Vec<Product> = serde_json::from_str(&json)
            .map_err(|e| ProductError::catalog_load(source_name.clone(), e))?;

        info!(path = %source_name, products = products.len(), "Loaded product catalog");
        Ok(Self::new(products))
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true when the catalog holds no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl DomainPort for ProductReference {}

#[async_trait]
impl HealthCheckable for ProductReference {
    async fn health_check(&self) -> HealthCheckResult {
        if self.products.is_empty() {
            HealthCheckResult::unhealthy("product-reference", "catalog is empty")
        } else {
            HealthCheckResult::healthy("product-reference")
        }
    }
}

#[async_trait]
impl ProductCatalog for ProductReference {
    async fn search_products(
        &self,
        criteria: &ProductSearchCriteria,
    ) -> Result<Vec<Product>, PortError> {
        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| criteria.matches(p))
            .cloned()
            .collect();

        debug!(
            fulfilment_code = ?criteria.fulfilment_code,
            matches = matches.len(),
            "Searched product catalog"
        );
        Ok(matches)
    }
}
