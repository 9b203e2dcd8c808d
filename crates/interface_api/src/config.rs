//! API configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use validator::Validate;

use infra_store::DatabaseConfig;

/// API configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// PostgreSQL URL for the object store; in-memory when absent
    pub database_url: Option<String>,
    #[validate(range(min = 1))]
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    /// Seconds a query waits for a pooled connection
    #[validate(range(min = 1))]
    pub database_acquire_timeout_secs: u64,
    pub database_idle_timeout_secs: u64,
    /// Bucket holding case records
    #[validate(length(min = 1))]
    pub case_bucket: String,
    /// Bucket holding unique access codes
    #[validate(length(min = 1))]
    pub uac_bucket: String,
    /// Product catalog JSON file; the built-in catalog when absent
    pub product_catalog_path: Option<PathBuf>,
    /// Capacity of the outbound event channel
    #[validate(range(min = 1))]
    pub event_channel_capacity: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            database_url: None,
            database_max_connections: 10,
            database_min_connections: 1,
            database_acquire_timeout_secs: 10,
            database_idle_timeout_secs: 600,
            case_bucket: "case_bucket".to_string(),
            uac_bucket: "uac_bucket".to_string(),
            product_catalog_path: None,
            event_channel_capacity: 1024,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Unset variables take the values of `ApiConfig::default()`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let config: Self = config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port)?
            .set_default("log_level", defaults.log_level)?
            .set_default("database_max_connections", defaults.database_max_connections)?
            .set_default("database_min_connections", defaults.database_min_connections)?
            .set_default(
                "database_acquire_timeout_secs",
                defaults.database_acquire_timeout_secs,
            )?
            .set_default("database_idle_timeout_secs", defaults.database_idle_timeout_secs)?
            .set_default("case_bucket", defaults.case_bucket)?
            .set_default("uac_bucket", defaults.uac_bucket)?
            .set_default("event_channel_capacity", defaults.event_channel_capacity as u64)?
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()?;

        config
            .validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(config)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings for the PostgreSQL store, if one is configured
    pub fn database_config(&self) -> Option<DatabaseConfig> {
        self.database_url.as_ref().map(|url| {
            DatabaseConfig::new(url)
                .max_connections(self.database_max_connections)
                .min_connections(self.database_min_connections)
                .acquire_timeout(Duration::from_secs(self.database_acquire_timeout_secs))
                .idle_timeout(Duration::from_secs(self.database_idle_timeout_secs))
        })
    }
}
