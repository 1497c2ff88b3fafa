use serde_json::{json, Value};

/// A well-formed raw analysis record as the records backend returns it.
#[allow(dead_code)]
pub fn raw_analysis(record_id: i64, ticker: &str) -> Value {
    json!({
        "Id": record_id,
        "Analysis Id": format!("AN-2025-08-29-{record_id}"),
        "Date time": "2025-08-29T13:49:52.751014+00:00",
        "Ticker": ticker,
        "Trade Type": "SWING",
        "Analysis": "# Overview\nConstructive setup above support.",
        "Analysis Prompt": "Analyze the daily chart.",
        "Decision": {
            "symbol": ticker,
            "analysis_date": "2025-08-29",
            "support": 151.56,
            "resistance": 179.46,
            "primary_action": "buy"
        },
        "3 Month Chart": [{
            "path": "download/charts/3m.png",
            "title": "3m.png",
            "mimetype": "image/png"
        }],
        "Chart": [{
            "path": "https://cdn.example.com/charts/1y.png",
            "title": "1y.png",
            "mimetype": "image/png"
        }],
        "Remarks": ""
    })
}

/// A raw active trade with an open position and no orders.
#[allow(dead_code)]
pub fn raw_positioned_trade(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "trade_type": "TREND",
        "position": {
            "qty": "106",
            "avg_entry_price": "228.18",
            "market_value": "24274",
            "unrealized_pl": "86.92",
            "current_price": "229",
            "side": "PositionSide.LONG",
            "change_today": "0"
        },
        "orders": [],
        "order_count": 0,
        "has_position": true,
        "tracking_data": null
    })
}

/// A raw active trade still waiting on its entry order.
#[allow(dead_code)]
pub fn raw_pending_trade(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "trade_type": "SWING",
        "position": null,
        "orders": [
            {
                "order_details": {
                    "id": format!("{symbol}-entry"),
                    "side": "OrderSide.BUY",
                    "qty": "14",
                    "status": "OrderStatus.NEW",
                    "stop_price": null,
                    "limit_price": "158.38",
                    "created_at": "2025-08-29T13:49:52.751014+00:00",
                    "submitted_at": "2025-08-29T13:49:52.759734+00:00",
                    "filled_at": null,
                    "filled_qty": "0",
                    "filled_avg_price": null
                },
                "order_type": "buy"
            },
            {
                "order_details": {
                    "id": format!("{symbol}-stop"),
                    "side": "OrderSide.SELL",
                    "qty": "14",
                    "status": "OrderStatus.HELD",
                    "stop_price": "151.56",
                    "limit_price": null,
                    "created_at": "2025-08-29T13:49:52.751014+00:00",
                    "submitted_at": "2025-08-29T13:49:52.751014+00:00",
                    "filled_at": null,
                    "filled_qty": "0",
                    "filled_avg_price": null
                },
                "order_type": "stop_loss"
            }
        ],
        "order_count": 2,
        "has_position": false,
        "tracking_data": null
    })
}

/// A raw active trade with neither a position nor orders.
#[allow(dead_code)]
pub fn raw_idle_trade(symbol: &str) -> Value {
    json!({
        "symbol": symbol,
        "trade_type": "POSITION_ONLY",
        "position": null,
        "orders": [],
        "order_count": 0,
        "has_position": false,
        "tracking_data": null
    })
}
