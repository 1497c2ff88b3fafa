use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::parse_timestamp;
use crate::broker::types::RawAccount;
use crate::format::parse_decimal;

/// The trading account in its stable internal shape. Monetary fields stay
/// as the backend's decimal strings; display parsing degrades to a
/// placeholder on failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountSnapshot {
    pub id: String,
    pub account_number: String,
    pub status: String,
    pub crypto_status: String,
    pub currency: String,
    pub created_at: Option<DateTime<Utc>>,
    pub multiplier: String,

    pub buying_power: Option<String>,
    pub regt_buying_power: Option<String>,
    pub daytrading_buying_power: Option<String>,
    pub non_marginable_buying_power: Option<String>,
    pub cash: Option<String>,
    pub options_buying_power: Option<String>,

    pub equity: Option<String>,
    pub last_equity: Option<String>,
    pub long_market_value: Option<String>,
    pub short_market_value: Option<String>,
    pub initial_margin: Option<String>,
    pub maintenance_margin: Option<String>,
    pub sma: Option<String>,
    pub portfolio_value: Option<String>,

    pub pattern_day_trader: bool,
    pub shorting_enabled: bool,
    pub trading_blocked: bool,
    pub transfers_blocked: bool,
    pub account_blocked: bool,
    pub options_trading_level: Option<i64>,
    pub options_approved_level: Option<i64>,
    pub daytrade_count: Option<i64>,
}

impl AccountSnapshot {
    /// Portfolio value over equity, floored at zero. `None` when either
    /// side is absent or unparseable, or when there is no gain to show.
    pub fn portfolio_gain(&self) -> Option<Decimal> {
        let value = self.portfolio_value.as_deref().and_then(parse_decimal)?;
        let equity = self.equity.as_deref().and_then(parse_decimal)?;
        let gain = value - equity;
        (gain > Decimal::ZERO).then_some(gain)
    }
}

pub fn normalize_account(raw: RawAccount) -> AccountSnapshot {
    AccountSnapshot {
        id: raw.id.unwrap_or_default(),
        account_number: raw.account_number.unwrap_or_default(),
        status: raw.status.unwrap_or_default(),
        crypto_status: raw.crypto_status.unwrap_or_default(),
        currency: raw.currency.unwrap_or_default(),
        created_at: raw.created_at.as_deref().and_then(parse_timestamp),
        multiplier: raw.multiplier.unwrap_or_default(),
        buying_power: raw.buying_power,
        regt_buying_power: raw.regt_buying_power,
        daytrading_buying_power: raw.daytrading_buying_power,
        non_marginable_buying_power: raw.non_marginable_buying_power,
        cash: raw.cash,
        options_buying_power: raw.options_buying_power,
        equity: raw.equity,
        last_equity: raw.last_equity,
        long_market_value: raw.long_market_value,
        short_market_value: raw.short_market_value,
        initial_margin: raw.initial_margin,
        maintenance_margin: raw.maintenance_margin,
        sma: raw.sma,
        portfolio_value: raw.portfolio_value,
        pattern_day_trader: raw.pattern_day_trader.unwrap_or(false),
        shorting_enabled: raw.shorting_enabled.unwrap_or(false),
        trading_blocked: raw.trading_blocked.unwrap_or(false),
        transfers_blocked: raw.transfers_blocked.unwrap_or(false),
        account_blocked: raw.account_blocked.unwrap_or(false),
        options_trading_level: raw.options_trading_level,
        options_approved_level: raw.options_approved_level,
        daytrade_count: raw.daytrade_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(portfolio_value: Option<&str>, equity: Option<&str>) -> AccountSnapshot {
        AccountSnapshot {
            portfolio_value: portfolio_value.map(String::from),
            equity: equity.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_portfolio_gain_positive() {
        let account = snapshot(Some("100142.78"), Some("100000.00"));
        assert_eq!(account.portfolio_gain(), Some(Decimal::new(14278, 2)));
    }

    #[test]
    fn test_portfolio_gain_hidden_when_flat_or_negative() {
        assert_eq!(snapshot(Some("100"), Some("100")).portfolio_gain(), None);
        assert_eq!(snapshot(Some("90"), Some("100")).portfolio_gain(), None);
    }

    #[test]
    fn test_portfolio_gain_tolerates_bad_input() {
        assert_eq!(snapshot(Some("abc"), Some("100")).portfolio_gain(), None);
        assert_eq!(snapshot(None, Some("100")).portfolio_gain(), None);
    }
}
