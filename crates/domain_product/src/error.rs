//! Product domain errors

use thiserror::Error;

/// Errors that can occur in the product domain
#[derive(Debug, Error)]
pub enum ProductError {
    /// A region code that does not map to a known region
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// The catalog could not be read
    #[error("Failed to load product catalog from {source_name}: {message}")]
    CatalogLoad {
        source_name: String,
        message: String,
    },
}

impl ProductError {
    /// Creates a CatalogLoad error
    pub fn catalog_load(source_name: impl Into<String>, message: impl ToString) -> Self {
        ProductError::CatalogLoad {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}
