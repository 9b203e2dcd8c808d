//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! respondent home test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built cases and products for common scenarios
//! - `builders`: Builder patterns for test data construction
//! - `harness`: A `FulfilmentService` wired to mock collaborators
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod harness;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use harness::*;
pub use generators::*;
