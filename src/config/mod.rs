use std::env;

use crate::errors::ConfigError;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Records backend (analyses + remarks write-back)
    pub records_base_url: String,
    pub records_table_id: String,
    pub records_view_id: String,
    pub records_api_token: String,

    // Broker backend (account snapshot, positions, active trades)
    pub broker_base_url: String,

    // Active-trades polling
    pub trades_poll_interval_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            records_base_url: require_url("RECORDS_API_BASE_URL")?,
            records_table_id: require("RECORDS_TABLE_ID")?,
            records_view_id: require("RECORDS_VIEW_ID")?,
            records_api_token: require("RECORDS_API_TOKEN")?,
            broker_base_url: require_url("BROKER_API_BASE_URL")?,
            trades_poll_interval_secs: env::var("TRADES_POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Base URLs are joined with relative paths, so a trailing slash is stripped.
fn require_url(name: &'static str) -> Result<String, ConfigError> {
    let value = require(name)?;
    Ok(value.trim_end_matches('/').to_string())
}
