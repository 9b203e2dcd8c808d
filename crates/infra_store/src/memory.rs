//! In-memory object store
//!
//! Used when no database is configured and in tests. Contents are lost on
//! restart.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError};

use crate::store::{field_text, path_literal, CloudDataStore};

/// Object store held in process memory
#[derive(Debug, Default)]
pub struct InMemoryDataStore {
    buckets: RwLock<HashMap<String, BTreeMap<String, String>>>,
}

impl InMemoryDataStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryDataStore {}

#[async_trait]
impl HealthCheckable for InMemoryDataStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("in-memory-data-store")
    }
}

#[async_trait]
impl CloudDataStore for InMemoryDataStore {
    async fn store_object(&self, bucket: &str, key: &str, value: String) -> Result<(), PortError> {
        if bucket.is_empty() || key.is_empty() {
            return Err(PortError::validation("bucket and key must not be empty"));
        }
        // Reject what the database adapter would reject.
        serde_json::from_str::<serde_json::Value>(&value)?;

        self.buckets
            .write()
            .await
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), value);
        debug!(bucket, key, "Object stored");
        Ok(())
    }

    async fn retrieve_object(&self, bucket: &str, key: &str) -> Result<Option<String>, PortError> {
        if bucket.is_empty() || key.is_empty() {
            return Ok(None);
        }
        Ok(self
            .buckets
            .read()
            .await
            .get(bucket)
            .and_then(|objects| objects.get(key))
            .cloned())
    }

    async fn search(
        &self,
        bucket: &str,
        field_path: &[&str],
        value: &str,
    ) -> Result<Vec<String>, PortError> {
        path_literal(field_path)?;
        let buckets = self.buckets.read().await;
        let Some(objects) = buckets.get(bucket) else {
            return Ok(Vec::new());
        };

        let mut found = Vec::new();
        for document in objects.values() {
            let parsed: serde_json::Value = serde_json::from_str(document)?;
            if field_text(&parsed, field_path).as_deref() == Some(value) {
                found.push(document.clone());
            }
        }
        Ok(found)
    }
}
