use reqwest::Client;
use thiserror::Error;

use super::types::{RawAccount, RawAccountResponse, RawActiveTrades, RawPosition};

#[derive(Debug, Error)]
pub enum BrokerClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// Client for the broker service exposing the trading account, open
/// positions, and the active-trades aggregate.
#[derive(Debug, Clone)]
pub struct BrokerClient {
    http: Client,
    base_url: String,
}

impl BrokerClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub async fn get_account(&self) -> Result<RawAccount, BrokerClientError> {
        let url = format!("{}/accountinfo", self.base_url);
        let resp = self.http.get(&url).send().await?.error_for_status()?;

        let envelope: RawAccountResponse = resp.json().await?;
        Ok(envelope.account)
    }

    pub async fn get_positions(&self) -> Result<Vec<RawPosition>, BrokerClientError> {
        let url = format!("{}/positions", self.base_url);
        let resp = self.http.get(&url).send().await?.error_for_status()?;

        let positions: Vec<RawPosition> = resp.json().await?;
        Ok(positions)
    }

    pub async fn get_active_trades(&self) -> Result<RawActiveTrades, BrokerClientError> {
        let url = format!("{}/active-trades", self.base_url);
        let resp = self.http.get(&url).send().await?.error_for_status()?;

        let trades: RawActiveTrades = resp.json().await?;
        Ok(trades)
    }
}
