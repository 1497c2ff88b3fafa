use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Account (GET /accountinfo)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RawAccountResponse {
    #[serde(rename = "getAccount")]
    pub account: RawAccount,
}

/// Account snapshot as the broker service returns it. Monetary fields are
/// decimal strings; anything the service may omit is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAccount {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub crypto_status: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub multiplier: Option<String>,
    #[serde(default)]
    pub buying_power: Option<String>,
    #[serde(default)]
    pub regt_buying_power: Option<String>,
    #[serde(default)]
    pub daytrading_buying_power: Option<String>,
    #[serde(default)]
    pub non_marginable_buying_power: Option<String>,
    #[serde(default)]
    pub cash: Option<String>,
    #[serde(default)]
    pub options_buying_power: Option<String>,
    #[serde(default)]
    pub equity: Option<String>,
    #[serde(default)]
    pub last_equity: Option<String>,
    #[serde(default)]
    pub long_market_value: Option<String>,
    #[serde(default)]
    pub short_market_value: Option<String>,
    #[serde(default)]
    pub initial_margin: Option<String>,
    #[serde(default)]
    pub maintenance_margin: Option<String>,
    #[serde(default)]
    pub sma: Option<String>,
    #[serde(default)]
    pub portfolio_value: Option<String>,
    #[serde(default)]
    pub pattern_day_trader: Option<bool>,
    #[serde(default)]
    pub shorting_enabled: Option<bool>,
    #[serde(default)]
    pub trading_blocked: Option<bool>,
    #[serde(default)]
    pub transfers_blocked: Option<bool>,
    #[serde(default)]
    pub account_blocked: Option<bool>,
    #[serde(default)]
    pub options_trading_level: Option<i64>,
    #[serde(default)]
    pub options_approved_level: Option<i64>,
    #[serde(default)]
    pub daytrade_count: Option<i64>,
}

// ---------------------------------------------------------------------------
// Positions (GET /positions)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RawPosition {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub qty: Option<String>,
    #[serde(default)]
    pub avg_entry_price: Option<String>,
    #[serde(default)]
    pub market_value: Option<String>,
    #[serde(default)]
    pub unrealized_pl: Option<String>,
    #[serde(default)]
    pub unrealized_plpc: Option<String>,
    #[serde(default)]
    pub current_price: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub change_today: Option<String>,
}

// ---------------------------------------------------------------------------
// Active trades aggregate (GET /active-trades)
// ---------------------------------------------------------------------------

/// Per-symbol trades stay as raw JSON so one malformed aggregate entry can
/// be skipped without dropping the whole snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct RawActiveTrades {
    #[serde(default)]
    pub summary: Option<RawTradeSummary>,
    #[serde(default)]
    pub active_trades: Vec<Value>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTradeSummary {
    #[serde(default)]
    pub total_symbols: u32,
    #[serde(default)]
    pub positions_count: u32,
    #[serde(default)]
    pub pending_entries: u32,
    #[serde(default)]
    pub swing_trades: u32,
    #[serde(default)]
    pub trend_trades: u32,
    #[serde(default)]
    pub total_active_orders: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawActiveTrade {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub trade_type: Option<String>,
    #[serde(default)]
    pub position: Option<RawPosition>,
    #[serde(default)]
    pub orders: Vec<RawOrder>,
    #[serde(default)]
    pub order_count: Option<u32>,
    #[serde(default)]
    pub has_position: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOrder {
    pub order_details: RawOrderDetails,
    #[serde(default)]
    pub order_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOrderDetails {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub qty: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub stop_price: Option<String>,
    #[serde(default)]
    pub limit_price: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub filled_at: Option<String>,
    #[serde(default)]
    pub filled_qty: Option<String>,
    #[serde(default)]
    pub filled_avg_price: Option<String>,
}
