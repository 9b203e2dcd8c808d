//! PostgreSQL object store
//!
//! All buckets share the `respondent_objects` table. Documents are kept as
//! JSONB so `search` can filter on a field path server-side.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;
use crate::store::{path_literal, CloudDataStore};

const ADAPTER_ID: &str = "postgres-data-store";
const SCHEMA: &str = include_str!("../sql/schema.sql");

/// PostgreSQL-backed implementation of `CloudDataStore`
#[derive(Debug, Clone)]
pub struct PgDataStore {
    pool: DatabasePool,
}

impl PgDataStore {
    /// Creates a store over an existing pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Creates the object table and its indexes if they are missing
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::MigrationFailed` if the DDL is rejected
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        info!("Object store schema ready");
        Ok(())
    }
}

impl DomainPort for PgDataStore {}

#[async_trait]
impl HealthCheckable for PgDataStore {
    /// Runs `SELECT 1` against the pool
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;
        let latency_ms = start.elapsed().as_millis() as u64;

        let mut health = match result {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID),
            Err(e) => HealthCheckResult::unhealthy(ADAPTER_ID, format!("Database error: {e}")),
        };
        health.latency_ms = latency_ms;
        if health.status == AdapterHealth::Healthy && latency_ms > 1_000 {
            health.status = AdapterHealth::Degraded;
        }
        health
    }
}

#[async_trait]
impl CloudDataStore for PgDataStore {
    #[instrument(skip(self, value))]
    async fn store_object(&self, bucket: &str, key: &str, value: String) -> Result<(), PortError> {
        if bucket.is_empty() || key.is_empty() {
            return Err(PortError::validation("bucket and key must not be empty"));
        }

        sqlx::query(
            r#"
            INSERT INTO respondent_objects (bucket, key, value)
            VALUES ($1, $2, $3::jsonb)
            ON CONFLICT (bucket, key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = now()
            "#,
        )
        .bind(bucket)
        .bind(key)
        .bind(&value)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        debug!("Object stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn retrieve_object(&self, bucket: &str, key: &str) -> Result<Option<String>, PortError> {
        if bucket.is_empty() || key.is_empty() {
            return Ok(None);
        }

        let value = sqlx::query_scalar::<_, String>(
            "SELECT value::text FROM respondent_objects WHERE bucket = $1 AND key = $2",
        )
        .bind(bucket)
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from)?;

        Ok(value)
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        bucket: &str,
        field_path: &[&str],
        value: &str,
    ) -> Result<Vec<String>, PortError> {
        // Written inline rather than bound so the UPRN expression index applies.
        let path = path_literal(field_path)?;
        let sql = format!(
            "SELECT value::text FROM respondent_objects \
             WHERE bucket = $1 AND value #>> {path} = $2 \
             ORDER BY key"
        );

        let documents = sqlx::query_scalar::<_, String>(&sql)
            .bind(bucket)
            .bind(value)
            .fetch_all(&self.pool)
            .await
            .map_err(DatabaseError::from)?;

        debug!(count = documents.len(), "Search complete");
        Ok(documents)
    }
}
