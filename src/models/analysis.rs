use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{parse_timestamp, TradeType};
use crate::errors::MalformedRecord;
use crate::records::types::{RawAnalysis, RawChartImage};

const DEFAULT_EXCHANGE: &str = "NASDAQ";

/// Reference to a chart image attachment. `Missing` means the backend sent
/// no attachment at all; `Url("")` means an attachment row exists but its
/// path is empty. The two must stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartRef {
    Missing,
    Url(String),
}

impl ChartRef {
    fn from_attachments(list: &[RawChartImage]) -> Self {
        match list.first() {
            None => ChartRef::Missing,
            Some(img) => ChartRef::Url(img.path.clone().unwrap_or_default()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ChartRef::Missing)
    }
}

/// A per-symbol analysis record in its stable internal shape. Raw backend
/// column names never leave this module.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRecord {
    /// Opaque analysis identifier, display only.
    pub id: String,
    /// Database record id — the sole key for remarks write-back.
    pub record_id: i64,
    pub datetime: DateTime<Utc>,
    pub symbol: String,
    pub exchange: String,
    pub trade_type: TradeType,
    pub analysis: String,
    pub prompt: String,
    /// Owned by an external system; passed through unparsed.
    pub decision: Value,
    pub chart_3month: ChartRef,
    pub chart_1year: ChartRef,
    pub remarks: String,
}

/// Result of normalizing one fetched page: the usable records plus how many
/// were dropped as malformed.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub records: Vec<AnalysisRecord>,
    pub skipped: usize,
}

/// Split a raw ticker on the first `:`. A missing or empty exchange part
/// falls back to the default exchange rather than failing.
pub fn split_ticker(ticker: &str) -> (&str, &str) {
    match ticker.split_once(':') {
        Some((symbol, exchange)) if !exchange.is_empty() => (symbol, exchange),
        Some((symbol, _)) => (symbol, DEFAULT_EXCHANGE),
        None => (ticker, DEFAULT_EXCHANGE),
    }
}

/// Normalize one raw record, or name the field that makes it unusable.
pub fn normalize_analysis(value: &Value) -> Result<AnalysisRecord, MalformedRecord> {
    let raw: RawAnalysis =
        serde_json::from_value(value.clone()).map_err(|_| MalformedRecord::field("record"))?;

    let record_id = raw.id.ok_or(MalformedRecord::field("Id"))?;
    let id = raw
        .analysis_id
        .filter(|v| !v.is_empty())
        .ok_or(MalformedRecord::field("Analysis Id"))?;
    let datetime = raw
        .datetime
        .as_deref()
        .and_then(parse_timestamp)
        .ok_or(MalformedRecord::field("Date time"))?;
    let ticker = raw
        .ticker
        .filter(|v| !v.is_empty())
        .ok_or(MalformedRecord::field("Ticker"))?;

    let (symbol, exchange) = split_ticker(&ticker);

    Ok(AnalysisRecord {
        id,
        record_id,
        datetime,
        symbol: symbol.to_string(),
        exchange: exchange.to_string(),
        trade_type: TradeType::from_api(raw.trade_type.as_deref().unwrap_or_default()),
        analysis: raw.analysis.unwrap_or_default(),
        prompt: raw.analysis_prompt.unwrap_or_default(),
        decision: raw.decision.unwrap_or(Value::Null),
        chart_3month: ChartRef::from_attachments(&raw.chart_3month),
        chart_1year: ChartRef::from_attachments(&raw.chart_1year),
        remarks: raw.remarks.unwrap_or_default(),
    })
}

/// Normalize a fetched page. Malformed records are skipped and counted; they
/// never fail the batch.
pub fn normalize_batch(items: &[Value]) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();

    for item in items {
        match normalize_analysis(item) {
            Ok(record) => batch.records.push(record),
            Err(e) => {
                tracing::warn!(field = e.field, "Skipping malformed analysis record");
                batch.skipped += 1;
            }
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> Value {
        json!({
            "Id": 1002,
            "Analysis Id": "AN-2025-08-29-AMD",
            "Date time": "2025-08-29T13:49:52.751014+00:00",
            "Ticker": "AMD:NASDAQ",
            "Trade Type": "SWING",
            "Analysis": "# AMD\nLooks constructive.",
            "Analysis Prompt": "Analyze AMD.",
            "Decision": { "primary_action": "buy", "support": 151.56 },
            "3 Month Chart": [{ "path": "download/charts/amd_3m.png" }],
            "Chart": [],
            "Remarks": "watch the gap"
        })
    }

    #[test]
    fn test_normalize_full_record() {
        let record = normalize_analysis(&sample_record()).unwrap();
        assert_eq!(record.record_id, 1002);
        assert_eq!(record.id, "AN-2025-08-29-AMD");
        assert_eq!(record.symbol, "AMD");
        assert_eq!(record.exchange, "NASDAQ");
        assert_eq!(record.trade_type, TradeType::Swing);
        assert_eq!(
            record.chart_3month,
            ChartRef::Url("download/charts/amd_3m.png".into())
        );
        assert_eq!(record.chart_1year, ChartRef::Missing);
        assert_eq!(record.remarks, "watch the gap");
        assert_eq!(record.decision["primary_action"], "buy");
    }

    #[test]
    fn test_split_ticker_with_exchange() {
        assert_eq!(split_ticker("TSLA:NYSE"), ("TSLA", "NYSE"));
    }

    #[test]
    fn test_split_ticker_defaults_exchange() {
        assert_eq!(split_ticker("BTCUSD"), ("BTCUSD", "NASDAQ"));
        assert_eq!(split_ticker("AMD:"), ("AMD", "NASDAQ"));
    }

    #[test]
    fn test_split_ticker_splits_on_first_colon() {
        assert_eq!(split_ticker("A:B:C"), ("A", "B:C"));
    }

    #[test]
    fn test_missing_remarks_defaults_to_empty() {
        let mut raw = sample_record();
        raw.as_object_mut().unwrap().remove("Remarks");
        let record = normalize_analysis(&raw).unwrap();
        assert_eq!(record.remarks, "");
    }

    #[test]
    fn test_chart_present_but_empty_path_is_not_missing() {
        let mut raw = sample_record();
        raw["3 Month Chart"] = json!([{ "title": "3m" }]);
        let record = normalize_analysis(&raw).unwrap();
        assert_eq!(record.chart_3month, ChartRef::Url(String::new()));
        assert!(!record.chart_3month.is_missing());
    }

    #[test]
    fn test_missing_id_is_malformed() {
        let mut raw = sample_record();
        raw.as_object_mut().unwrap().remove("Id");
        let err = normalize_analysis(&raw).unwrap_err();
        assert_eq!(err.field, "Id");
    }

    #[test]
    fn test_unparseable_datetime_is_malformed() {
        let mut raw = sample_record();
        raw["Date time"] = json!("not a time");
        let err = normalize_analysis(&raw).unwrap_err();
        assert_eq!(err.field, "Date time");
    }

    #[test]
    fn test_batch_skips_malformed_and_counts() {
        let mut bad = sample_record();
        bad.as_object_mut().unwrap().remove("Analysis Id");

        let items: Vec<Value> = vec![
            sample_record(),
            sample_record(),
            bad,
            sample_record(),
            sample_record(),
        ];
        let batch = normalize_batch(&items);
        assert_eq!(batch.records.len(), 4);
        assert_eq!(batch.skipped, 1);
    }

    #[test]
    fn test_batch_survives_non_object_entries() {
        let items: Vec<Value> = vec![json!("garbage"), sample_record()];
        let batch = normalize_batch(&items);
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.skipped, 1);
    }
}
