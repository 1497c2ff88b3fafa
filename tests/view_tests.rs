mod common;

use std::time::Instant;

use chrono::{Local, NaiveDate};
use serde_json::{json, Value};

use tradedesk::broker::types::RawActiveTrades;
use tradedesk::models::analysis::normalize_batch;
use tradedesk::models::trade::normalize_book;
use tradedesk::view::remarks::SaveIndicator;
use tradedesk::view::{AnalysisView, SortColumn, TradeFilter, TradesView};

fn loaded_trades_view() -> TradesView {
    let raw: RawActiveTrades = serde_json::from_value(json!({
        "active_trades": [
            common::raw_positioned_trade("A"),
            common::raw_pending_trade("B"),
            common::raw_idle_trade("C"),
        ]
    }))
    .unwrap();

    let mut view = TradesView::new();
    view.apply_snapshot(Ok(normalize_book(raw)), Local::now());
    view
}

#[test]
fn test_pending_tier_is_exactly_the_orderful_positionless_trade() {
    // A has a position and no orders, B has no position and a buy order,
    // C has neither.
    let mut view = loaded_trades_view();
    view.set_filter(TradeFilter::Pending);
    let symbols: Vec<&str> = view.visible().iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["B"]);
}

#[test]
fn test_filter_tiers_cover_all_without_overlap() {
    let mut view = loaded_trades_view();

    view.set_filter(TradeFilter::Positions);
    assert_eq!(view.visible().len(), 1);
    view.set_filter(TradeFilter::Pending);
    assert_eq!(view.visible().len(), 1);
    view.set_filter(TradeFilter::All);
    assert_eq!(view.visible().len(), 3);
}

fn positioned_with_value(symbol: &str, market_value: &str) -> Value {
    let mut raw = common::raw_positioned_trade(symbol);
    raw["position"]["market_value"] = json!(market_value);
    raw
}

#[test]
fn test_sorting_numeric_string_column_and_toggling() {
    let raw: RawActiveTrades = serde_json::from_value(json!({
        "active_trades": [
            positioned_with_value("A", "24274"),
            positioned_with_value("B", "512.5"),
            positioned_with_value("C", "9.75"),
        ]
    }))
    .unwrap();
    let mut view = TradesView::new();
    view.apply_snapshot(Ok(normalize_book(raw)), Local::now());

    // "9.75" < "512.5" < "24274" numerically, though not lexicographically.
    view.set_sort(SortColumn::MarketValue);
    let ascending: Vec<String> = view.visible().iter().map(|t| t.symbol.clone()).collect();
    assert_eq!(ascending, vec!["C", "B", "A"]);

    view.set_sort(SortColumn::MarketValue);
    let descending: Vec<String> = view.visible().iter().map(|t| t.symbol.clone()).collect();
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn test_remarks_save_failure_keeps_optimistic_value() {
    let mut view = AnalysisView::new(NaiveDate::from_ymd_opt(2025, 8, 29).unwrap());
    let ticket = view.refresh();
    let items: Vec<Value> = vec![common::raw_analysis(1002, "AMD:NASDAQ")];
    view.finish_load(ticket.seq, Ok(normalize_batch(&items)));

    view.select_symbol("AMD");
    view.remarks.as_mut().unwrap().text = "note".into();
    let request = view.begin_remarks_save().unwrap();
    assert_eq!(request.record_id, 1002);
    assert!(view.remarks.as_ref().unwrap().is_saving());

    // Backend answers HTTP 500.
    view.finish_remarks_save(1002, Err("HTTP 500 Internal Server Error".into()), Instant::now());

    let form = view.remarks.as_ref().unwrap();
    assert_eq!(view.current().unwrap().remarks, "note");
    assert!(!form.is_saving());
    assert!(matches!(form.indicator(), SaveIndicator::Failed(_)));
}

#[test]
fn test_new_date_selection_wins_over_slow_fetch() {
    let mut view = AnalysisView::new(NaiveDate::from_ymd_opt(2025, 8, 29).unwrap());
    let slow = view.select_date(NaiveDate::from_ymd_opt(2025, 8, 29).unwrap());
    assert_eq!(slow.date, "2025-08-29");

    // The user re-selects before the first fetch lands.
    let fast = view.select_date(NaiveDate::from_ymd_opt(2025, 8, 30).unwrap());
    let fresh: Vec<Value> = vec![common::raw_analysis(2, "AMZN:NASDAQ")];
    view.finish_load(fast.seq, Ok(normalize_batch(&fresh)));

    let stale: Vec<Value> = vec![common::raw_analysis(1, "AMD:NASDAQ")];
    view.finish_load(slow.seq, Ok(normalize_batch(&stale)));

    assert_eq!(view.records.len(), 1);
    assert_eq!(view.records[0].symbol, "AMZN");
}
