use anyhow::{Context, Result};
use config::{Config, Environment, File};
use moka::future::Cache;
use sea_orm::Database;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://cashback.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Backend settings.
///
/// Sources, lowest priority first: built-in defaults, an optional
/// `cashback.toml` in the working directory, `CASHBACK_*` environment
/// variables (a `.env` file is loaded first). CLI flags are applied on top
/// by the caller.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    /// Maximum number of cached monthly figures
    pub cache_capacity: u64,
    pub cache_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            cache_capacity: 1000,
            cache_ttl_secs: 300,
        }
    }
}

impl AppConfig {
    /// Load configuration from `cashback.toml` and the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(Config::builder().add_source(File::with_name("cashback").required(false)))
    }

    fn load_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        let defaults = Self::default();
        let settings = builder
            .add_source(Environment::with_prefix("CASHBACK"))
            .set_default("database_url", defaults.database_url)?
            .set_default("bind_address", defaults.bind_address)?
            .set_default("cache_capacity", defaults.cache_capacity)?
            .set_default("cache_ttl_secs", defaults.cache_ttl_secs)?
            .build()
            .context("Failed to read configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, database_url: Option<String>, bind_address: Option<String>) -> Self {
        if let Some(database_url) = database_url {
            self.database_url = database_url;
        }
        if let Some(bind_address) = bind_address {
            self.bind_address = bind_address;
        }
        self
    }

    /// Build the shared month cache.
    pub fn build_cache(&self) -> Cache<String, crate::schemas::CachedData> {
        Cache::builder()
            .max_capacity(self.cache_capacity)
            .time_to_live(Duration::from_secs(self.cache_ttl_secs))
            .build()
    }
}

/// Connect to the configured database and create the application state.
pub async fn initialize_app_state(config: &AppConfig) -> Result<AppState> {
    info!("Connecting to database: {}", config.database_url);
    let db = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", config.database_url))?;

    let cache = config.build_cache();

    Ok(AppState::new(db, cache))
}
