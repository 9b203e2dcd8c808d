//! Case Domain
//!
//! A case is one sampled address or unit tracked through the enumeration.
//! Case records and their unique access codes are created upstream by case
//! management and are read-only here. This crate defines their shape, the
//! `CaseReader` port used to look cases up, and the household case query
//! behind the UPRN endpoint.

pub mod case;
pub mod error;
pub mod ports;
pub mod services;
pub mod summary;
pub mod uac;

pub use case::{Address, AddressType, CollectionCase};
pub use error::CaseQueryError;
pub use ports::CaseReader;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockCaseReader;
pub use services::CaseService;
pub use summary::CaseSummary;
pub use uac::Uac;
