use reqwest::Client;
use thiserror::Error;

use super::types::RawRecordsPage;
use crate::config::AppConfig;

const AUTH_HEADER: &str = "xc-token";

#[derive(Debug, Error)]
pub enum RecordsClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// Client for the records backend holding the analyses table. All requests
/// carry the static API token; only the first page of results is consumed.
#[derive(Debug, Clone)]
pub struct RecordsClient {
    http: Client,
    base_url: String,
    table_id: String,
    view_id: String,
    token: String,
}

impl RecordsClient {
    pub fn new(http: Client, config: &AppConfig) -> Self {
        Self {
            http,
            base_url: config.records_base_url.clone(),
            table_id: config.records_table_id.clone(),
            view_id: config.records_view_id.clone(),
            token: config.records_api_token.clone(),
        }
    }

    fn records_url(&self) -> String {
        format!("{}/api/v2/tables/{}/records", self.base_url, self.table_id)
    }

    /// Fetch all analysis records whose `Date time` matches the given
    /// `YYYY-MM-DD` date exactly.
    pub async fn list_analyses(&self, date: &str) -> Result<RawRecordsPage, RecordsClientError> {
        let where_clause = exact_date_filter(date);
        let resp = self
            .http
            .get(self.records_url())
            .query(&[
                ("offset", "0"),
                ("where", where_clause.as_str()),
                ("viewId", self.view_id.as_str()),
            ])
            .header(AUTH_HEADER, &self.token)
            .send()
            .await?
            .error_for_status()?;

        let page: RawRecordsPage = resp.json().await?;
        Ok(page)
    }

    /// Update the `Remarks` field of a single record. The backend takes
    /// updates as a list; this always sends exactly one element keyed by the
    /// record id.
    pub async fn update_remarks(
        &self,
        record_id: i64,
        remarks: &str,
    ) -> Result<(), RecordsClientError> {
        let body = serde_json::json!([{ "Id": record_id, "Remarks": remarks }]);

        let resp = self
            .http
            .patch(self.records_url())
            .header(AUTH_HEADER, &self.token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(RecordsClientError::Unexpected(format!(
                "remarks update failed: {status} {detail}"
            )));
        }

        tracing::debug!(record_id, "Remarks updated");
        Ok(())
    }
}

fn exact_date_filter(date: &str) -> String {
    format!("(Date time,eq,exactDate,{date})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_date_filter() {
        assert_eq!(
            exact_date_filter("2025-08-29"),
            "(Date time,eq,exactDate,2025-08-29)"
        );
    }
}
