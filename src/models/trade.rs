use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{parse_timestamp, OrderKind, OrderStatus, PositionSide, Side, TradeType};
use crate::broker::types::{RawActiveTrade, RawActiveTrades, RawOrder, RawPosition, RawTradeSummary};
use crate::errors::MalformedRecord;

/// An open position. Numeric fields keep the backend's decimal strings;
/// parsing happens at format/compare time so a bad value degrades to a
/// placeholder instead of poisoning the whole record.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRecord {
    pub symbol: String,
    pub qty: String,
    pub avg_entry_price: String,
    pub market_value: String,
    pub unrealized_pl: String,
    pub unrealized_plpc: Option<String>,
    pub current_price: String,
    pub side: PositionSide,
    pub change_today: String,
}

/// One outstanding or filled order under an active trade.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeOrder {
    pub id: String,
    pub side: Side,
    pub qty: String,
    pub kind: OrderKind,
    pub status: OrderStatus,
    pub limit_price: Option<String>,
    pub stop_price: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub filled_at: Option<DateTime<Utc>>,
    pub filled_qty: String,
    pub filled_avg_price: Option<String>,
}

/// Symbol-keyed bundle of an optional open position plus its outstanding
/// orders. Position and orders are independent: both, either, or neither may
/// be present.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTrade {
    pub symbol: String,
    pub trade_type: TradeType,
    pub position: Option<PositionRecord>,
    pub orders: Vec<TradeOrder>,
    pub order_count: usize,
    pub has_position: bool,
}

impl ActiveTrade {
    /// The outstanding entry order, if any. A trade carries at most one.
    pub fn pending_entry(&self) -> Option<&TradeOrder> {
        self.orders.iter().find(|o| o.kind == OrderKind::Entry)
    }

    /// A trade waiting on its entry: no position yet, but orders working.
    pub fn is_pending_entry(&self) -> bool {
        !self.has_position && !self.orders.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeSummary {
    pub total_symbols: u32,
    pub positions_count: u32,
    pub pending_entries: u32,
    pub swing_trades: u32,
    pub trend_trades: u32,
    pub total_active_orders: u32,
}

/// The normalized active-trades snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveTradeBook {
    pub summary: TradeSummary,
    pub trades: Vec<ActiveTrade>,
    pub as_of: Option<DateTime<Utc>>,
    pub skipped: usize,
}

pub fn normalize_position(symbol: &str, raw: &RawPosition) -> PositionRecord {
    PositionRecord {
        symbol: raw
            .symbol
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| symbol.to_string()),
        qty: raw.qty.clone().unwrap_or_default(),
        avg_entry_price: raw.avg_entry_price.clone().unwrap_or_default(),
        market_value: raw.market_value.clone().unwrap_or_default(),
        unrealized_pl: raw.unrealized_pl.clone().unwrap_or_default(),
        unrealized_plpc: raw.unrealized_plpc.clone(),
        current_price: raw.current_price.clone().unwrap_or_default(),
        side: PositionSide::from_api(raw.side.as_deref().unwrap_or_default()),
        change_today: raw.change_today.clone().unwrap_or_default(),
    }
}

/// Normalize one order. Returns `None` (logged) for orders outside the
/// closed kind classification or missing their id.
fn normalize_order(raw: &RawOrder) -> Option<TradeOrder> {
    let details = &raw.order_details;

    let kind = match raw.order_type.as_deref().and_then(OrderKind::from_api) {
        Some(kind) => kind,
        None => {
            tracing::debug!(
                order_type = raw.order_type.as_deref().unwrap_or(""),
                "Skipping order with unrecognized kind"
            );
            return None;
        }
    };
    let id = details.id.clone().filter(|v| !v.is_empty())?;

    Some(TradeOrder {
        id,
        side: Side::from_api(details.side.as_deref().unwrap_or_default()),
        qty: details.qty.clone().unwrap_or_default(),
        kind,
        status: OrderStatus::from_api(details.status.as_deref().unwrap_or_default()),
        limit_price: details.limit_price.clone(),
        stop_price: details.stop_price.clone(),
        created_at: details.created_at.as_deref().and_then(parse_timestamp),
        submitted_at: details.submitted_at.as_deref().and_then(parse_timestamp),
        filled_at: details.filled_at.as_deref().and_then(parse_timestamp),
        filled_qty: details.filled_qty.clone().unwrap_or_default(),
        filled_avg_price: details.filled_avg_price.clone(),
    })
}

pub fn normalize_trade(value: &Value) -> Result<ActiveTrade, MalformedRecord> {
    let raw: RawActiveTrade =
        serde_json::from_value(value.clone()).map_err(|_| MalformedRecord::field("trade"))?;

    let symbol = raw
        .symbol
        .filter(|v| !v.is_empty())
        .ok_or(MalformedRecord::field("symbol"))?;

    let position = raw.position.as_ref().map(|p| normalize_position(&symbol, p));
    let orders: Vec<TradeOrder> = raw.orders.iter().filter_map(normalize_order).collect();
    let has_position = raw.has_position.unwrap_or(position.is_some());

    Ok(ActiveTrade {
        order_count: raw.order_count.map(|c| c as usize).unwrap_or(orders.len()),
        symbol,
        trade_type: TradeType::from_api(raw.trade_type.as_deref().unwrap_or_default()),
        position,
        orders,
        has_position,
    })
}

fn normalize_summary(raw: &RawTradeSummary) -> TradeSummary {
    TradeSummary {
        total_symbols: raw.total_symbols,
        positions_count: raw.positions_count,
        pending_entries: raw.pending_entries,
        swing_trades: raw.swing_trades,
        trend_trades: raw.trend_trades,
        total_active_orders: raw.total_active_orders,
    }
}

/// Normalize the aggregate snapshot. Malformed per-symbol entries are
/// skipped and counted, never fatal.
pub fn normalize_book(raw: RawActiveTrades) -> ActiveTradeBook {
    let mut book = ActiveTradeBook {
        summary: raw.summary.as_ref().map(normalize_summary).unwrap_or_default(),
        as_of: raw.timestamp.as_deref().and_then(parse_timestamp),
        ..Default::default()
    };

    for item in &raw.active_trades {
        match normalize_trade(item) {
            Ok(trade) => book.trades.push(trade),
            Err(e) => {
                tracing::warn!(field = e.field, "Skipping malformed active trade");
                book.skipped += 1;
            }
        }
    }

    book
}
