//! Storage Infrastructure
//!
//! Case and UAC records arrive as events from case management and are kept
//! as JSON documents in an object store, one bucket per record kind. This
//! crate provides:
//!
//! - the `CloudDataStore` port with in-memory and PostgreSQL adapters
//! - `RespondentDataRepository`, the `CaseReader` used by the services
//! - `CaseEventReceiver` and `UacEventReceiver`, which write inbound events
//!   to the store
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{DatabaseConfig, PgDataStore, RespondentDataRepository, create_pool};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/rh")).await?;
//! let store = PgDataStore::new(pool);
//! store.ensure_schema().await?;
//! let repository = RespondentDataRepository::new(Arc::new(store), "case_bucket");
//! ```

pub mod error;
pub mod memory;
pub mod pool;
pub mod postgres;
pub mod receiver;
pub mod repository;
pub mod store;

pub use error::DatabaseError;
pub use memory::InMemoryDataStore;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use postgres::PgDataStore;
pub use receiver::{
    CaseEvent, CaseEventReceiver, CasePayload, UacEvent, UacEventReceiver, UacPayload,
};
pub use repository::RespondentDataRepository;
pub use store::CloudDataStore;
