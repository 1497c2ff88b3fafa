pub mod account;
pub mod analysis;
pub mod trade;

pub use account::AccountSnapshot;
pub use analysis::{AnalysisRecord, ChartRef, NormalizedBatch};
pub use trade::{ActiveTrade, ActiveTradeBook, PositionRecord, TradeOrder, TradeSummary};

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enum-string normalization
// ---------------------------------------------------------------------------

/// Strip a dotted namespace prefix from a backend enum string:
/// `"OrderSide.BUY"` -> `"BUY"`. Already-clean values pass through unchanged,
/// so applying this twice is a no-op.
pub fn strip_enum_prefix(raw: &str) -> &str {
    match raw.rsplit_once('.') {
        Some((_, value)) => value,
        None => raw,
    }
}

// ---------------------------------------------------------------------------
// Side (orders)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
    Other(String),
}

impl Side {
    pub fn from_api(raw: &str) -> Self {
        let value = strip_enum_prefix(raw);
        match value.to_uppercase().as_str() {
            "BUY" => Side::Buy,
            "SELL" => Side::Sell,
            _ => Side::Other(value.to_string()),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
            Side::Other(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// PositionSide
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionSide {
    Long,
    Short,
    Other(String),
}

impl PositionSide {
    pub fn from_api(raw: &str) -> Self {
        let value = strip_enum_prefix(raw);
        match value.to_uppercase().as_str() {
            "LONG" => PositionSide::Long,
            "SHORT" => PositionSide::Short,
            _ => PositionSide::Other(value.to_string()),
        }
    }

    pub fn is_long(&self) -> bool {
        matches!(self, PositionSide::Long)
    }
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSide::Long => write!(f, "long"),
            PositionSide::Short => write!(f, "short"),
            PositionSide::Other(s) => write!(f, "{}", s.to_lowercase()),
        }
    }
}

// ---------------------------------------------------------------------------
// TradeType — open set; unseen values are preserved, not rejected
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeType {
    Swing,
    Trend,
    PositionOnly,
    Other(String),
}

impl TradeType {
    pub fn from_api(raw: &str) -> Self {
        let value = strip_enum_prefix(raw);
        match value.to_uppercase().as_str() {
            "SWING" => TradeType::Swing,
            "TREND" => TradeType::Trend,
            "POSITION_ONLY" => TradeType::PositionOnly,
            _ => TradeType::Other(value.to_string()),
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeType::Swing => write!(f, "SWING"),
            TradeType::Trend => write!(f, "TREND"),
            TradeType::PositionOnly => write!(f, "POSITION_ONLY"),
            TradeType::Other(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// OrderStatus — open set; at least NEW, HELD, FILLED exist upstream
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    Held,
    Filled,
    Other(String),
}

impl OrderStatus {
    pub fn from_api(raw: &str) -> Self {
        let value = strip_enum_prefix(raw);
        match value.to_uppercase().as_str() {
            "NEW" => OrderStatus::New,
            "HELD" => OrderStatus::Held,
            "FILLED" => OrderStatus::Filled,
            _ => OrderStatus::Other(value.to_string()),
        }
    }

    /// An order still waiting on the market.
    pub fn is_pending(&self) -> bool {
        matches!(self, OrderStatus::New | OrderStatus::Held)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::New => write!(f, "new"),
            OrderStatus::Held => write!(f, "held"),
            OrderStatus::Filled => write!(f, "filled"),
            OrderStatus::Other(s) => write!(f, "{}", s.to_lowercase()),
        }
    }
}

// ---------------------------------------------------------------------------
// OrderKind — closed classification from the active-trades aggregate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderKind {
    Entry,
    StopLoss,
    TakeProfit,
    FilledEntry,
}

impl OrderKind {
    pub fn from_api(raw: &str) -> Option<Self> {
        match raw {
            "buy" => Some(OrderKind::Entry),
            "stop_loss" => Some(OrderKind::StopLoss),
            "take_profit" => Some(OrderKind::TakeProfit),
            "buy_filled" => Some(OrderKind::FilledEntry),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderKind::Entry => "buy",
            OrderKind::StopLoss => "stop loss",
            OrderKind::TakeProfit => "take profit",
            OrderKind::FilledEntry => "buy filled",
        }
    }
}

// ---------------------------------------------------------------------------
// Timestamp parsing
// ---------------------------------------------------------------------------

/// Parse a backend timestamp. The two backends disagree on formats, so this
/// tries RFC 3339 first and falls back to the space-separated variants; naive
/// values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    None
}
