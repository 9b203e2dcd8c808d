//! Product Domain
//!
//! Products describe the fulfilments a respondent may ask for: which code,
//! for which kind of case, delivered how, in which regions, and through which
//! request channels. The catalog itself is owned elsewhere; this crate defines
//! the product model, the search criteria, the `ProductCatalog` port, and a
//! JSON-backed catalog adapter.

pub mod product;
pub mod criteria;
pub mod error;
pub mod ports;
pub mod catalog;

pub use product::{CaseType, DeliveryChannel, Product, Region, RequestChannel};
pub use criteria::ProductSearchCriteria;
pub use error::ProductError;
pub use ports::ProductCatalog;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockProductCatalog;
pub use catalog::ProductReference;
