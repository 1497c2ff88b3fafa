use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// List envelope
// ---------------------------------------------------------------------------

/// One page of records. Elements stay as raw JSON so a single malformed
/// record can be skipped during normalization instead of failing the page.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecordsPage {
    #[serde(default)]
    pub list: Vec<Value>,
    #[serde(default, alias = "pageInfo")]
    pub page_info: Option<RawPageInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPageInfo {
    #[serde(default, alias = "totalRows")]
    pub total_rows: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default, alias = "pageSize")]
    pub page_size: Option<u64>,
    #[serde(default, alias = "isFirstPage")]
    pub is_first_page: Option<bool>,
    #[serde(default, alias = "isLastPage")]
    pub is_last_page: Option<bool>,
}

// ---------------------------------------------------------------------------
// Analysis record — backend column names, quoted verbatim
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RawAnalysis {
    #[serde(default, rename = "Id")]
    pub id: Option<i64>,
    #[serde(default, rename = "Analysis Id")]
    pub analysis_id: Option<String>,
    #[serde(default, rename = "Date time")]
    pub datetime: Option<String>,
    #[serde(default, rename = "Ticker")]
    pub ticker: Option<String>,
    #[serde(default, rename = "Trade Type")]
    pub trade_type: Option<String>,
    #[serde(default, rename = "Analysis")]
    pub analysis: Option<String>,
    #[serde(default, rename = "Analysis Prompt")]
    pub analysis_prompt: Option<String>,
    #[serde(default, rename = "Decision")]
    pub decision: Option<Value>,
    #[serde(default, rename = "3 Month Chart")]
    pub chart_3month: Vec<RawChartImage>,
    #[serde(default, rename = "Chart")]
    pub chart_1year: Vec<RawChartImage>,
    #[serde(default, rename = "Remarks")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawChartImage {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub mimetype: Option<String>,
    #[serde(default, alias = "signedPath")]
    pub signed_path: Option<String>,
}
