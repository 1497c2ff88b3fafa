use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Local};

use crate::models::{ActiveTrade, ActiveTradeBook};

/// Tri-state list filter. `Positions` and `Pending` are disjoint by
/// construction: pending explicitly excludes trades that hold a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeFilter {
    All,
    Positions,
    Pending,
}

impl TradeFilter {
    pub fn title(self) -> &'static str {
        match self {
            TradeFilter::All => "All",
            TradeFilter::Positions => "Positions",
            TradeFilter::Pending => "Pending",
        }
    }

    pub fn all() -> &'static [TradeFilter] {
        &[TradeFilter::All, TradeFilter::Positions, TradeFilter::Pending]
    }

    pub fn next(self) -> Self {
        let filters = Self::all();
        let idx = filters.iter().position(|&f| f == self).unwrap_or(0);
        filters[(idx + 1) % filters.len()]
    }

    fn matches(self, trade: &ActiveTrade) -> bool {
        match self {
            TradeFilter::All => true,
            TradeFilter::Positions => trade.has_position,
            TradeFilter::Pending => trade.is_pending_entry(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Symbol,
    TradeType,
    Side,
    Qty,
    AvgEntry,
    CurrentPrice,
    MarketValue,
    UnrealizedPl,
    ChangeToday,
    OrderCount,
}

impl SortColumn {
    pub fn title(self) -> &'static str {
        match self {
            SortColumn::Symbol => "Symbol",
            SortColumn::TradeType => "Type",
            SortColumn::Side => "Side",
            SortColumn::Qty => "Quantity",
            SortColumn::AvgEntry => "Avg Entry",
            SortColumn::CurrentPrice => "Current",
            SortColumn::MarketValue => "Market Value",
            SortColumn::UnrealizedPl => "Unrealized P&L",
            SortColumn::ChangeToday => "Change Today",
            SortColumn::OrderCount => "Orders",
        }
    }

    pub fn all() -> &'static [SortColumn] {
        &[
            SortColumn::Symbol,
            SortColumn::TradeType,
            SortColumn::Side,
            SortColumn::Qty,
            SortColumn::AvgEntry,
            SortColumn::CurrentPrice,
            SortColumn::MarketValue,
            SortColumn::UnrealizedPl,
            SortColumn::ChangeToday,
            SortColumn::OrderCount,
        ]
    }

    pub fn next(self) -> Self {
        let columns = Self::all();
        let idx = columns.iter().position(|&c| c == self).unwrap_or(0);
        columns[(idx + 1) % columns.len()]
    }

    /// The raw sort key for one trade. Position columns of positionless
    /// trades key on the empty string, which the mixed comparator orders
    /// ahead of any value.
    fn key(self, trade: &ActiveTrade) -> String {
        let position = trade.position.as_ref();
        match self {
            SortColumn::Symbol => trade.symbol.clone(),
            SortColumn::TradeType => trade.trade_type.to_string(),
            SortColumn::Side => position.map(|p| p.side.to_string()).unwrap_or_default(),
            SortColumn::Qty => position.map(|p| p.qty.clone()).unwrap_or_default(),
            SortColumn::AvgEntry => position
                .map(|p| p.avg_entry_price.clone())
                .unwrap_or_default(),
            SortColumn::CurrentPrice => position
                .map(|p| p.current_price.clone())
                .unwrap_or_default(),
            SortColumn::MarketValue => position
                .map(|p| p.market_value.clone())
                .unwrap_or_default(),
            SortColumn::UnrealizedPl => position
                .map(|p| p.unrealized_pl.clone())
                .unwrap_or_default(),
            SortColumn::ChangeToday => position
                .map(|p| p.change_today.clone())
                .unwrap_or_default(),
            SortColumn::OrderCount => trade.order_count.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Dual-mode comparison: numeric when both sides parse to finite numbers,
/// otherwise lexicographic on the raw strings. Total and panic-free on any
/// input; a parse failure on one side alone falls through to the string
/// comparison.
pub fn compare_mixed(a: &str, b: &str) -> Ordering {
    match (parse_finite(a), parse_finite(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// State for the trades page: the latest normalized snapshot plus the
/// filter/sort/expansion/selection the user has applied to it.
#[derive(Debug, Clone)]
pub struct TradesView {
    pub book: Option<ActiveTradeBook>,
    pub filter: TradeFilter,
    pub sort: Option<(SortColumn, SortDirection)>,
    pub expanded: HashSet<String>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub last_update: Option<DateTime<Local>>,
}

impl TradesView {
    pub fn new() -> Self {
        Self {
            book: None,
            filter: TradeFilter::All,
            sort: None,
            expanded: HashSet::new(),
            selected: 0,
            loading: true,
            error: None,
            last_update: None,
        }
    }

    /// Replace the snapshot with a freshly polled one. Expansion and sort
    /// state deliberately survive the replace; only the row selection is
    /// clamped to the new list.
    pub fn apply_snapshot(
        &mut self,
        result: Result<ActiveTradeBook, String>,
        now: DateTime<Local>,
    ) {
        self.loading = false;
        match result {
            Ok(book) => {
                self.book = Some(book);
                self.error = None;
                self.last_update = Some(now);
                self.clamp_selection();
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    pub fn set_filter(&mut self, filter: TradeFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.selected = 0;
        }
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Sort-column click semantics: a new column sorts ascending; the
    /// already-active column toggles direction.
    pub fn set_sort(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some((current, direction)) if current == column => {
                Some((column, direction.toggle()))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Move the active sort to the next column (always ascending).
    pub fn cycle_sort_column(&mut self) {
        let next = match self.sort {
            Some((column, _)) => column.next(),
            None => SortColumn::Symbol,
        };
        self.sort = Some((next, SortDirection::Ascending));
    }

    pub fn toggle_expanded(&mut self, key: &str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_string());
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn toggle_selected_expansion(&mut self) {
        let symbol = self.visible().get(self.selected).map(|t| t.symbol.clone());
        if let Some(symbol) = symbol {
            self.toggle_expanded(&symbol);
        }
    }

    /// The filtered, sorted trades to display. The sort is stable, so
    /// equal keys keep the backend's order.
    pub fn visible(&self) -> Vec<&ActiveTrade> {
        let Some(book) = &self.book else {
            return Vec::new();
        };
        let mut trades: Vec<&ActiveTrade> = book
            .trades
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect();

        if let Some((column, direction)) = self.sort {
            trades.sort_by(|a, b| {
                let ordering = compare_mixed(&column.key(a), &column.key(b));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        trades
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Default for TradesView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trade::{PositionRecord, TradeOrder};
    use crate::models::{OrderKind, OrderStatus, PositionSide, Side, TradeSummary, TradeType};

    fn position(qty: &str) -> PositionRecord {
        PositionRecord {
            symbol: "X".into(),
            qty: qty.into(),
            avg_entry_price: "10".into(),
            market_value: "100".into(),
            unrealized_pl: "0".into(),
            unrealized_plpc: None,
            current_price: "10".into(),
            side: PositionSide::Long,
            change_today: "0".into(),
        }
    }

    fn entry_order(id: &str) -> TradeOrder {
        TradeOrder {
            id: id.into(),
            side: Side::Buy,
            qty: "10".into(),
            kind: OrderKind::Entry,
            status: OrderStatus::New,
            limit_price: Some("100".into()),
            stop_price: None,
            created_at: None,
            submitted_at: None,
            filled_at: None,
            filled_qty: "0".into(),
            filled_avg_price: None,
        }
    }

    fn trade(symbol: &str, pos: Option<PositionRecord>, orders: Vec<TradeOrder>) -> ActiveTrade {
        let has_position = pos.is_some();
        ActiveTrade {
            symbol: symbol.into(),
            trade_type: TradeType::Swing,
            order_count: orders.len(),
            position: pos,
            orders,
            has_position,
        }
    }

    fn view_with(trades: Vec<ActiveTrade>) -> TradesView {
        let mut view = TradesView::new();
        view.apply_snapshot(
            Ok(ActiveTradeBook {
                summary: TradeSummary::default(),
                trades,
                as_of: None,
                skipped: 0,
            }),
            Local::now(),
        );
        view
    }

    #[test]
    fn test_pending_filter_excludes_positions_and_orderless() {
        // A: position, no orders. B: one buy order, no position. C: neither.
        let view = {
            let mut v = view_with(vec![
                trade("A", Some(position("1")), vec![]),
                trade("B", None, vec![entry_order("o1")]),
                trade("C", None, vec![]),
            ]);
            v.set_filter(TradeFilter::Pending);
            v
        };
        let symbols: Vec<&str> = view.visible().iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["B"]);
    }

    #[test]
    fn test_positions_and_pending_are_disjoint_and_all_is_everything() {
        let mut view = view_with(vec![
            trade("A", Some(position("1")), vec![entry_order("o1")]),
            trade("B", None, vec![entry_order("o2")]),
            trade("C", None, vec![]),
        ]);

        view.set_filter(TradeFilter::Positions);
        let positions: HashSet<String> =
            view.visible().iter().map(|t| t.symbol.clone()).collect();
        view.set_filter(TradeFilter::Pending);
        let pending: HashSet<String> =
            view.visible().iter().map(|t| t.symbol.clone()).collect();
        view.set_filter(TradeFilter::All);

        assert!(positions.is_disjoint(&pending));
        assert_eq!(view.visible().len(), 3);
    }

    #[test]
    fn test_sort_toggle_reverses_order_exactly() {
        let mut view = view_with(vec![
            trade("A", Some(position("106")), vec![]),
            trade("B", Some(position("9.5")), vec![]),
            trade("C", Some(position("14")), vec![]),
        ]);

        view.set_sort(SortColumn::Qty);
        let ascending: Vec<String> =
            view.visible().iter().map(|t| t.symbol.clone()).collect();
        assert_eq!(ascending, vec!["B", "C", "A"]);

        view.set_sort(SortColumn::Qty);
        let descending: Vec<String> =
            view.visible().iter().map(|t| t.symbol.clone()).collect();
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_new_sort_column_resets_to_ascending() {
        let mut view = view_with(vec![]);
        view.set_sort(SortColumn::Qty);
        view.set_sort(SortColumn::Qty);
        assert_eq!(view.sort, Some((SortColumn::Qty, SortDirection::Descending)));
        view.set_sort(SortColumn::Symbol);
        assert_eq!(
            view.sort,
            Some((SortColumn::Symbol, SortDirection::Ascending))
        );
    }

    #[test]
    fn test_mixed_keys_never_panic_and_order_totally() {
        let mut view = view_with(vec![
            trade("NUM", Some(position("12.5")), vec![]),
            trade("BAD", Some(position("not-a-number")), vec![]),
            trade("NONE", None, vec![]),
            trade("NAN", Some(position("NaN")), vec![]),
        ]);
        view.set_sort(SortColumn::Qty);
        assert_eq!(view.visible().len(), 4);
        view.set_sort(SortColumn::Qty);
        assert_eq!(view.visible().len(), 4);
    }

    #[test]
    fn test_compare_mixed() {
        assert_eq!(compare_mixed("9.5", "14"), Ordering::Less);
        assert_eq!(compare_mixed("14", "9.5"), Ordering::Greater);
        // One side unparseable: raw string comparison of both.
        assert_eq!(compare_mixed("9.5", "abc"), Ordering::Less);
        assert_eq!(compare_mixed("NaN", "NaN"), Ordering::Equal);
    }

    #[test]
    fn test_stable_sort_preserves_input_order_on_ties() {
        let mut view = view_with(vec![
            trade("Z", Some(position("5")), vec![]),
            trade("M", Some(position("5")), vec![]),
            trade("A", Some(position("5")), vec![]),
        ]);
        view.set_sort(SortColumn::Qty);
        let symbols: Vec<String> = view.visible().iter().map(|t| t.symbol.clone()).collect();
        assert_eq!(symbols, vec!["Z", "M", "A"]);
    }

    #[test]
    fn test_expansion_survives_snapshot_replace() {
        let mut view = view_with(vec![trade("AMD", None, vec![entry_order("o1")])]);
        view.toggle_expanded("AMD");
        assert!(view.is_expanded("AMD"));

        view.apply_snapshot(
            Ok(ActiveTradeBook {
                summary: TradeSummary::default(),
                trades: vec![trade("AMD", Some(position("14")), vec![])],
                as_of: None,
                skipped: 0,
            }),
            Local::now(),
        );
        assert!(view.is_expanded("AMD"));
    }

    #[test]
    fn test_toggle_expansion_twice_collapses() {
        let mut view = view_with(vec![trade("AMD", None, vec![])]);
        view.toggle_expanded("AMD");
        view.toggle_expanded("AMD");
        assert!(!view.is_expanded("AMD"));
    }

    #[test]
    fn test_error_keeps_previous_snapshot() {
        let mut view = view_with(vec![trade("AMD", None, vec![entry_order("o1")])]);
        view.apply_snapshot(Err("connection refused".into()), Local::now());
        assert_eq!(view.error.as_deref(), Some("connection refused"));
        assert_eq!(view.visible().len(), 1);
    }

    #[test]
    fn test_selection_clamped_on_shrinking_snapshot() {
        let mut view = view_with(vec![
            trade("A", None, vec![entry_order("o1")]),
            trade("B", None, vec![entry_order("o2")]),
            trade("C", None, vec![entry_order("o3")]),
        ]);
        view.selected = 2;
        view.apply_snapshot(
            Ok(ActiveTradeBook {
                summary: TradeSummary::default(),
                trades: vec![trade("A", None, vec![entry_order("o1")])],
                as_of: None,
                skipped: 0,
            }),
            Local::now(),
        );
        assert_eq!(view.selected, 0);
    }
}
