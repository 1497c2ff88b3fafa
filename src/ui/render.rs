use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap};
use ratatui::Frame;

use super::App;
use crate::format::{
    format_currency, format_datetime_local, format_datetime_short, format_price,
    format_quantity, format_signed_percent, parse_decimal, resolve_chart_url, PLACEHOLDER,
};
use crate::models::{AccountSnapshot, ActiveTrade, ChartRef};
use crate::view::remarks::SaveIndicator;
use crate::view::{ChartTab, ContentTab, Page, TradeFilter};

const ACCENT: Color = Color::Cyan;
const GAIN: Color = Color::Green;
const LOSS: Color = Color::Red;
const DIM: Color = Color::DarkGray;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_page_tabs(frame, app, chunks[0]);
    match app.page {
        Page::Analysis => draw_analysis(frame, app, chunks[1]),
        Page::Trades => draw_trades(frame, app, chunks[1]),
        Page::Account => draw_account(frame, app, chunks[1]),
    }
    draw_footer(frame, app, chunks[2]);
}

fn draw_page_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<&str> = Page::all().iter().map(|p| p.title()).collect();
    let selected = Page::all().iter().position(|&p| p == app.page).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" tradedesk "));
    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hint = if app.editing_remarks {
        "editing remarks — Ctrl+S save · Esc done"
    } else {
        match app.page {
            Page::Analysis => {
                "←/→ date · ↑/↓ symbol · Tab content · c chart · e edit remarks · r refresh · q quit"
            }
            Page::Trades => {
                "f filter · s sort column · d direction · ↑/↓ row · Enter expand · r refresh · q quit"
            }
            Page::Account => "r refresh · q quit",
        }
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(DIM)),
        area,
    );
}

fn centered_notice(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Analysis page
// ---------------------------------------------------------------------------

fn draw_analysis(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.analysis;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let symbol_count = view.records.len();
    let mut header = vec![
        Span::raw("Date: "),
        Span::styled(view.date.to_string(), Style::default().fg(ACCENT)),
        Span::raw("   Symbol: "),
        Span::styled(
            view.selected_symbol.clone().unwrap_or_else(|| "—".into()),
            Style::default().fg(ACCENT),
        ),
        Span::styled(
            format!("  ({symbol_count} for this date)"),
            Style::default().fg(DIM),
        ),
    ];
    if view.skipped > 0 {
        header.push(Span::styled(
            format!("  {} malformed record(s) skipped", view.skipped),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(header)), chunks[0]);

    if view.loading {
        centered_notice(frame, chunks[2], "Loading analyses...", DIM);
        return;
    }
    if let Some(error) = &view.error {
        centered_notice(frame, chunks[2], &format!("Error loading data: {error}"), LOSS);
        return;
    }
    if view.records.is_empty() {
        centered_notice(
            frame,
            chunks[2],
            "No analysis records found for the selected date. Pick another date (←/→).",
            Color::Yellow,
        );
        return;
    }

    let Some(record) = view.current() else {
        centered_notice(
            frame,
            chunks[2],
            "Select a symbol (↑/↓) to view analysis details.",
            ACCENT,
        );
        return;
    };

    // Details strip: id, timestamp, ticker, trade classification.
    let details = Line::from(vec![
        Span::styled("ID ", Style::default().fg(DIM)),
        Span::raw(record.id.clone()),
        Span::styled("  Time ", Style::default().fg(DIM)),
        Span::raw(format_datetime_local(record.datetime)),
        Span::styled("  Ticker ", Style::default().fg(DIM)),
        Span::raw(format!("{}:{}", record.symbol, record.exchange)),
        Span::styled("  Type ", Style::default().fg(DIM)),
        Span::raw(record.trade_type.to_string()),
    ]);
    frame.render_widget(
        Paragraph::new(details).block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[2]);

    draw_analysis_content(frame, app, body[0]);
    draw_chart_panel(frame, app, body[1]);
}

fn draw_analysis_content(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.analysis;
    let Some(record) = view.current() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles: Vec<&str> = ContentTab::all().iter().map(|t| t.title()).collect();
    let selected = ContentTab::all()
        .iter()
        .position(|&t| t == view.content_tab)
        .unwrap_or(0);
    frame.render_widget(
        Tabs::new(titles)
            .select(selected)
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    match view.content_tab {
        ContentTab::Analysis => draw_text_body(frame, chunks[1], &record.analysis, view.scroll),
        ContentTab::Prompt => draw_text_body(frame, chunks[1], &record.prompt, view.scroll),
        ContentTab::Decision => {
            let pretty = serde_json::to_string_pretty(&record.decision)
                .unwrap_or_else(|_| PLACEHOLDER.to_string());
            draw_text_body(frame, chunks[1], &pretty, view.scroll);
        }
        ContentTab::Remarks => draw_remarks_editor(frame, app, chunks[1]),
    }
}

fn draw_text_body(frame: &mut Frame, area: Rect, text: &str, scroll: u16) {
    let paragraph = Paragraph::new(text.to_string())
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn draw_remarks_editor(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.analysis;
    let Some(form) = &view.remarks else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let title = if app.editing_remarks {
        " Remarks (editing) "
    } else {
        " Remarks — press e to edit "
    };
    let editor = Paragraph::new(form.text.clone())
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(editor, chunks[0]);

    let status = match form.indicator() {
        SaveIndicator::None => Line::from(""),
        SaveIndicator::Saving => Line::from(Span::styled(
            "Saving...",
            Style::default().fg(DIM),
        )),
        SaveIndicator::Saved => Line::from(Span::styled(
            "Remarks saved successfully!",
            Style::default().fg(GAIN),
        )),
        SaveIndicator::Failed(message) => Line::from(Span::styled(
            format!("Failed to save remarks: {message} — shown value is not persisted"),
            Style::default().fg(LOSS),
        )),
    };
    frame.render_widget(Paragraph::new(status), chunks[1]);
}

fn draw_chart_panel(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.analysis;
    let Some(record) = view.current() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let titles = vec![ChartTab::ThreeMonth.title(), ChartTab::OneYear.title()];
    let selected = match view.chart_tab {
        ChartTab::ThreeMonth => 0,
        ChartTab::OneYear => 1,
    };
    frame.render_widget(
        Tabs::new(titles)
            .select(selected)
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let chart: &ChartRef = match view.chart_tab {
        ChartTab::ThreeMonth => &record.chart_3month,
        ChartTab::OneYear => &record.chart_1year,
    };
    let body = match resolve_chart_url(&app.records_base_url, chart) {
        Some(url) => Paragraph::new(format!("Chart image:\n{url}"))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL)),
        None => Paragraph::new(format!("{} not available", view.chart_tab.title()))
            .style(Style::default().fg(DIM))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
    };
    frame.render_widget(body, chunks[1]);
}

// ---------------------------------------------------------------------------
// Trades page
// ---------------------------------------------------------------------------

fn draw_trades(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.trades;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    // Summary roll-up straight from the backend.
    if let Some(book) = &view.book {
        let s = &book.summary;
        let line = Line::from(vec![
            Span::styled("Symbols ", Style::default().fg(DIM)),
            Span::raw(s.total_symbols.to_string()),
            Span::styled("  Positions ", Style::default().fg(DIM)),
            Span::raw(s.positions_count.to_string()),
            Span::styled("  Pending ", Style::default().fg(DIM)),
            Span::raw(s.pending_entries.to_string()),
            Span::styled("  Swing ", Style::default().fg(DIM)),
            Span::raw(s.swing_trades.to_string()),
            Span::styled("  Trend ", Style::default().fg(DIM)),
            Span::raw(s.trend_trades.to_string()),
            Span::styled("  Active Orders ", Style::default().fg(DIM)),
            Span::raw(s.total_active_orders.to_string()),
            Span::styled(
                book.as_of
                    .map(|t| format!("   as of {}", format_datetime_short(t)))
                    .unwrap_or_default(),
                Style::default().fg(DIM),
            ),
            Span::styled(
                view.last_update
                    .map(|t| format!("   updated {}", t.format("%H:%M:%S")))
                    .unwrap_or_default(),
                Style::default().fg(DIM),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[0]);
    }

    // Filter + sort state.
    let mut controls: Vec<Span> = Vec::new();
    for &filter in TradeFilter::all() {
        let style = if filter == view.filter {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM)
        };
        controls.push(Span::styled(format!("[{}] ", filter.title()), style));
    }
    if let Some((column, direction)) = view.sort {
        controls.push(Span::styled(
            format!("  sort: {} {}", column.title(), direction.arrow()),
            Style::default().fg(ACCENT),
        ));
    }
    if let Some(skipped) = view.book.as_ref().map(|b| b.skipped).filter(|&n| n > 0) {
        controls.push(Span::styled(
            format!("  {skipped} malformed entries skipped"),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(error) = &view.error {
        controls.push(Span::styled(
            format!("  fetch error: {error}"),
            Style::default().fg(LOSS),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(controls)), chunks[1]);

    if view.loading && view.book.is_none() {
        centered_notice(frame, chunks[2], "Loading trades...", DIM);
        return;
    }

    let trades = view.visible();
    if trades.is_empty() {
        centered_notice(frame, chunks[2], "No trades found in this category.", DIM);
        return;
    }

    let header = Row::new(vec![
        "Symbol",
        "Type",
        "Side",
        "Quantity",
        "Avg Entry",
        "Current",
        "Market Value",
        "Unrealized P&L",
        "Change Today",
        "Orders",
    ])
    .style(Style::default().fg(DIM).add_modifier(Modifier::BOLD));

    let mut rows: Vec<Row> = Vec::new();
    for (idx, trade) in trades.iter().enumerate() {
        rows.push(trade_row(trade, idx == view.selected, view.is_expanded(&trade.symbol)));
        if view.is_expanded(&trade.symbol) {
            for order in &trade.orders {
                rows.push(order_row(order));
            }
        }
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(14),
            Constraint::Length(15),
            Constraint::Length(13),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Trades "));
    frame.render_widget(table, chunks[2]);
}

fn signed_style(value: &str) -> Style {
    let non_negative = parse_decimal(value)
        .map(|v| v >= rust_decimal::Decimal::ZERO)
        .unwrap_or(true);
    Style::default().fg(if non_negative { GAIN } else { LOSS })
}

fn trade_row<'a>(trade: &'a ActiveTrade, selected: bool, expanded: bool) -> Row<'a> {
    let marker = if expanded { "▾ " } else { "▸ " };
    let cells: Vec<Cell> = match &trade.position {
        Some(p) => vec![
            Cell::from(format!("{marker}{}", trade.symbol)),
            Cell::from(trade.trade_type.to_string()),
            Cell::from(p.side.to_string().to_uppercase()),
            Cell::from(format_quantity(&p.qty)),
            Cell::from(format_currency(&p.avg_entry_price)),
            Cell::from(format_currency(&p.current_price)),
            Cell::from(format_currency(&p.market_value)),
            Cell::from(Span::styled(
                format_currency(&p.unrealized_pl),
                signed_style(&p.unrealized_pl),
            )),
            Cell::from(Span::styled(
                format_signed_percent(&p.change_today),
                signed_style(&p.change_today),
            )),
            Cell::from(format!("{} orders", trade.order_count)),
        ],
        None => {
            let entry = trade.pending_entry();
            let entry_price = entry
                .and_then(|o| o.limit_price.as_deref())
                .map(format_price)
                .unwrap_or_else(|| "—".into());
            vec![
                Cell::from(format!("{marker}{}", trade.symbol)),
                Cell::from(trade.trade_type.to_string()),
                Cell::from("—"),
                Cell::from(
                    entry
                        .map(|o| o.qty.clone())
                        .unwrap_or_else(|| "—".into()),
                ),
                Cell::from(format!("@{entry_price}")),
                Cell::from("—"),
                Cell::from("—"),
                Cell::from(Span::styled(
                    "Pending Entry",
                    Style::default().fg(Color::Yellow),
                )),
                Cell::from("—"),
                Cell::from(format!("{} orders", trade.order_count)),
            ]
        }
    };

    let mut row = Row::new(cells);
    if selected {
        row = row.style(Style::default().add_modifier(Modifier::REVERSED));
    }
    row
}

fn order_row<'a>(order: &'a crate::models::TradeOrder) -> Row<'a> {
    let price = order
        .limit_price
        .as_deref()
        .or(order.stop_price.as_deref())
        .map(format_price)
        .unwrap_or_else(|| "—".into());
    let created = order
        .created_at
        .map(format_datetime_short)
        .unwrap_or_else(|| "—".into());
    let dim = Style::default().fg(DIM);

    Row::new(vec![
        Cell::from(""),
        Cell::from(Span::styled(order.kind.label(), dim)),
        Cell::from(Span::styled(order.side.to_string(), dim)),
        Cell::from(Span::styled(order.qty.clone(), dim)),
        Cell::from(Span::styled(format!("@{price}"), dim)),
        Cell::from(""),
        Cell::from(""),
        Cell::from(Span::styled(format!("({})", order.status), dim)),
        Cell::from(Span::styled(created, dim)),
        Cell::from(""),
    ])
}

// ---------------------------------------------------------------------------
// Account page
// ---------------------------------------------------------------------------

fn money_line<'a>(label: &'a str, value: Option<&str>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<22}"), Style::default().fg(DIM)),
        Span::raw(value.map(format_currency).unwrap_or_else(|| PLACEHOLDER.into())),
    ])
}

fn text_line<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<22}"), Style::default().fg(DIM)),
        Span::raw(value),
    ])
}

fn flag_line<'a>(label: &'a str, value: bool, bad_when_true: bool) -> Line<'a> {
    let color = if value == bad_when_true { LOSS } else { GAIN };
    Line::from(vec![
        Span::styled(format!("{label:<22}"), Style::default().fg(DIM)),
        Span::styled(if value { "Yes" } else { "No" }, Style::default().fg(color)),
    ])
}

fn draw_account(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.account;

    if view.loading {
        centered_notice(frame, area, "Loading account data...", DIM);
        return;
    }
    if let Some(error) = &view.error {
        centered_notice(frame, area, &format!("Error: {error}"), LOSS);
        return;
    }
    let Some(account) = &view.account else {
        centered_notice(frame, area, "No account data available", DIM);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(12),
            Constraint::Length(8),
        ])
        .split(area);

    // Portfolio summary header.
    let mut summary = vec![
        Span::styled(
            format!("Account #{}", account.account_number),
            Style::default().fg(DIM),
        ),
        Span::raw("   "),
        Span::styled(
            account
                .portfolio_value
                .as_deref()
                .map(format_currency)
                .unwrap_or_else(|| PLACEHOLDER.into()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(gain) = account.portfolio_gain() {
        summary.push(Span::styled(
            format!("  +{}", format_currency(&gain.to_string())),
            Style::default().fg(GAIN),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(summary)), chunks[0]);

    let grid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(grid[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(grid[1]);

    frame.render_widget(
        Paragraph::new(account_info_lines(account))
            .block(Block::default().borders(Borders::ALL).title(" Account Information ")),
        left[0],
    );
    frame.render_widget(
        Paragraph::new(buying_power_lines(account))
            .block(Block::default().borders(Borders::ALL).title(" Buying Power ")),
        right[0],
    );
    frame.render_widget(
        Paragraph::new(portfolio_lines(account))
            .block(Block::default().borders(Borders::ALL).title(" Portfolio Metrics ")),
        left[1],
    );
    frame.render_widget(
        Paragraph::new(status_lines(account))
            .block(Block::default().borders(Borders::ALL).title(" Status & Settings ")),
        right[1],
    );

    draw_positions_table(frame, app, chunks[2]);
}

fn account_info_lines(account: &AccountSnapshot) -> Vec<Line<'_>> {
    vec![
        text_line("ID", account.id.clone()),
        text_line("Account Number", account.account_number.clone()),
        text_line("Status", account.status.clone()),
        text_line("Crypto Status", account.crypto_status.clone()),
        text_line("Currency", account.currency.clone()),
        text_line(
            "Created At",
            account
                .created_at
                .map(format_datetime_local)
                .unwrap_or_else(|| PLACEHOLDER.into()),
        ),
        text_line("Multiplier", format!("{}x", account.multiplier)),
    ]
}

fn buying_power_lines(account: &AccountSnapshot) -> Vec<Line<'_>> {
    vec![
        money_line("Buying Power", account.buying_power.as_deref()),
        money_line("Regt Buying Power", account.regt_buying_power.as_deref()),
        money_line("Daytrading Power", account.daytrading_buying_power.as_deref()),
        money_line(
            "Non-Marginable",
            account.non_marginable_buying_power.as_deref(),
        ),
        money_line("Cash", account.cash.as_deref()),
        money_line("Options Power", account.options_buying_power.as_deref()),
    ]
}

fn portfolio_lines(account: &AccountSnapshot) -> Vec<Line<'_>> {
    vec![
        money_line("Equity", account.equity.as_deref()),
        money_line("Last Equity", account.last_equity.as_deref()),
        money_line("Long Market Value", account.long_market_value.as_deref()),
        money_line("Short Market Value", account.short_market_value.as_deref()),
        money_line("Initial Margin", account.initial_margin.as_deref()),
        money_line("Maintenance Margin", account.maintenance_margin.as_deref()),
        money_line("SMA", account.sma.as_deref()),
    ]
}

fn status_lines(account: &AccountSnapshot) -> Vec<Line<'_>> {
    let options = format!(
        "Level {} (Approved: {})",
        account
            .options_trading_level
            .map(|v| v.to_string())
            .unwrap_or_else(|| PLACEHOLDER.into()),
        account
            .options_approved_level
            .map(|v| v.to_string())
            .unwrap_or_else(|| PLACEHOLDER.into()),
    );
    vec![
        flag_line("Pattern Day Trader", account.pattern_day_trader, false),
        flag_line("Shorting Enabled", account.shorting_enabled, false),
        flag_line("Trading Blocked", account.trading_blocked, true),
        flag_line("Transfers Blocked", account.transfers_blocked, true),
        flag_line("Account Blocked", account.account_blocked, true),
        text_line("Options Level", options),
        text_line(
            "Day Trade Count",
            account
                .daytrade_count
                .map(|v| v.to_string())
                .unwrap_or_else(|| PLACEHOLDER.into()),
        ),
    ]
}

fn draw_positions_table(frame: &mut Frame, app: &App, area: Rect) {
    let positions = &app.account.positions;
    if positions.is_empty() {
        centered_notice(frame, area, "No open positions.", DIM);
        return;
    }

    let header = Row::new(vec![
        "Symbol", "Side", "Quantity", "Avg Entry", "Current", "Market Value", "Unrealized P&L",
    ])
    .style(Style::default().fg(DIM).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = positions
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.symbol.clone()),
                Cell::from(p.side.to_string().to_uppercase()),
                Cell::from(format_quantity(&p.qty)),
                Cell::from(format_currency(&p.avg_entry_price)),
                Cell::from(format_currency(&p.current_price)),
                Cell::from(format_currency(&p.market_value)),
                Cell::from(Span::styled(
                    format_currency(&p.unrealized_pl),
                    signed_style(&p.unrealized_pl),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(11),
            Constraint::Length(14),
            Constraint::Min(14),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Open Positions "));
    frame.render_widget(table, area);
}
