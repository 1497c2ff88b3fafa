mod render;

use std::time::{Duration, Instant};

use chrono::{Days, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::broker::BrokerClient;
use crate::config::AppConfig;
use crate::models::account::normalize_account;
use crate::models::analysis::{normalize_batch, NormalizedBatch};
use crate::models::trade::normalize_position;
use crate::models::{AccountSnapshot, PositionRecord};
use crate::records::RecordsClient;
use crate::services::trades_poller::{self, TradesUpdate};
use crate::view::analysis::FetchTicket;
use crate::view::remarks::RemarksSaveRequest;
use crate::view::{AccountView, AnalysisView, ContentTab, Page, TradesView};

/// Fetch completions delivered back into the event loop.
pub enum AppEvent {
    Analyses {
        seq: u64,
        result: Result<NormalizedBatch, String>,
    },
    Account(Result<(AccountSnapshot, Vec<PositionRecord>), String>),
    RemarksSaved {
        record_id: i64,
        result: Result<(), String>,
    },
}

pub struct App {
    pub page: Page,
    pub analysis: AnalysisView,
    pub trades: TradesView,
    pub account: AccountView,
    pub records_base_url: String,
    pub editing_remarks: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            page: Page::Analysis,
            analysis: AnalysisView::new(Local::now().date_naive()),
            trades: TradesView::new(),
            account: AccountView::new(),
            records_base_url: config.records_base_url.clone(),
            editing_remarks: false,
            should_quit: false,
        }
    }

    fn on_key(
        &mut self,
        key: KeyEvent,
        records: &RecordsClient,
        broker: &BrokerClient,
        event_tx: &mpsc::Sender<AppEvent>,
        trades_tx: &mpsc::Sender<TradesUpdate>,
    ) {
        if self.editing_remarks {
            self.on_edit_key(key, records, event_tx);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.page = Page::Analysis,
            KeyCode::Char('2') => self.page = Page::Trades,
            KeyCode::Char('3') => self.page = Page::Account,
            _ => match self.page {
                Page::Analysis => self.on_analysis_key(key, records, event_tx),
                Page::Trades => self.on_trades_key(key, broker, trades_tx),
                Page::Account => self.on_account_key(key, broker, event_tx),
            },
        }
    }

    /// Keys while the remarks editor has focus. Everything except the
    /// escape hatch and the save chord goes into the text.
    fn on_edit_key(
        &mut self,
        key: KeyEvent,
        records: &RecordsClient,
        event_tx: &mpsc::Sender<AppEvent>,
    ) {
        match key.code {
            KeyCode::Esc => self.editing_remarks = false,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(request) = self.analysis.begin_remarks_save() {
                    spawn_remarks_save(records, request, event_tx);
                }
            }
            KeyCode::Enter => {
                if let Some(form) = self.analysis.remarks.as_mut() {
                    form.insert_char('\n');
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.analysis.remarks.as_mut() {
                    form.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = self.analysis.remarks.as_mut() {
                    form.insert_char(c);
                }
            }
            _ => {}
        }
    }

    fn on_analysis_key(
        &mut self,
        key: KeyEvent,
        records: &RecordsClient,
        event_tx: &mpsc::Sender<AppEvent>,
    ) {
        match key.code {
            KeyCode::Left | KeyCode::Char('[') => self.change_date(-1, records, event_tx),
            KeyCode::Right | KeyCode::Char(']') => self.change_date(1, records, event_tx),
            KeyCode::Down | KeyCode::Char('j') => self.analysis.select_next_symbol(),
            KeyCode::Up | KeyCode::Char('k') => self.analysis.select_prev_symbol(),
            KeyCode::Tab => {
                let next = self.analysis.content_tab.next();
                self.analysis.set_content_tab(next);
            }
            KeyCode::BackTab => {
                let prev = self.analysis.content_tab.prev();
                self.analysis.set_content_tab(prev);
            }
            KeyCode::Char('c') => self.analysis.toggle_chart_tab(),
            KeyCode::Char('e') => {
                if self.analysis.current().is_some() {
                    self.analysis.set_content_tab(ContentTab::Remarks);
                    self.editing_remarks = true;
                }
            }
            KeyCode::Char('r') => {
                let ticket = self.analysis.refresh();
                spawn_analyses_fetch(records, ticket, event_tx);
            }
            KeyCode::PageDown => {
                self.analysis.scroll = self.analysis.scroll.saturating_add(5);
            }
            KeyCode::PageUp => {
                self.analysis.scroll = self.analysis.scroll.saturating_sub(5);
            }
            _ => {}
        }
    }

    fn on_trades_key(
        &mut self,
        key: KeyEvent,
        broker: &BrokerClient,
        trades_tx: &mpsc::Sender<TradesUpdate>,
    ) {
        match key.code {
            KeyCode::Char('f') => self.trades.cycle_filter(),
            KeyCode::Char('s') => self.trades.cycle_sort_column(),
            KeyCode::Char('d') => {
                if let Some((column, _)) = self.trades.sort {
                    self.trades.set_sort(column);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.trades.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.trades.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => self.trades.toggle_selected_expansion(),
            KeyCode::Char('r') => {
                self.trades.loading = true;
                spawn_trades_refresh(broker, trades_tx);
            }
            _ => {}
        }
    }

    fn on_account_key(
        &mut self,
        key: KeyEvent,
        broker: &BrokerClient,
        event_tx: &mpsc::Sender<AppEvent>,
    ) {
        if key.code == KeyCode::Char('r') {
            self.account.start_load();
            spawn_account_fetch(broker, event_tx);
        }
    }

    fn change_date(
        &mut self,
        delta: i64,
        records: &RecordsClient,
        event_tx: &mpsc::Sender<AppEvent>,
    ) {
        let date = if delta < 0 {
            self.analysis.date.checked_sub_days(Days::new(1))
        } else {
            self.analysis.date.checked_add_days(Days::new(1))
        };
        if let Some(date) = date {
            let ticket = self.analysis.select_date(date);
            spawn_analyses_fetch(records, ticket, event_tx);
        }
    }

    fn on_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Analyses { seq, result } => self.analysis.finish_load(seq, result),
            AppEvent::Account(result) => self.account.finish_load(result),
            AppEvent::RemarksSaved { record_id, result } => {
                self.analysis.finish_remarks_save(record_id, result, now);
            }
        }
    }

    fn tick(&mut self, now: Instant) {
        self.analysis.tick(now);
    }
}

fn spawn_analyses_fetch(
    records: &RecordsClient,
    ticket: FetchTicket,
    tx: &mpsc::Sender<AppEvent>,
) {
    let records = records.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = match records.list_analyses(&ticket.date).await {
            Ok(page) => Ok(normalize_batch(&page.list)),
            Err(e) => {
                tracing::warn!(error = %e, date = %ticket.date, "Analyses fetch failed");
                Err(e.to_string())
            }
        };
        let _ = tx
            .send(AppEvent::Analyses {
                seq: ticket.seq,
                result,
            })
            .await;
    });
}

fn spawn_account_fetch(broker: &BrokerClient, tx: &mpsc::Sender<AppEvent>) {
    let broker = broker.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = fetch_account(&broker).await;
        let _ = tx.send(AppEvent::Account(result)).await;
    });
}

async fn fetch_account(
    broker: &BrokerClient,
) -> Result<(AccountSnapshot, Vec<PositionRecord>), String> {
    let (account, positions) = tokio::join!(broker.get_account(), broker.get_positions());

    let account = normalize_account(account.map_err(|e| {
        tracing::warn!(error = %e, "Account fetch failed");
        e.to_string()
    })?);
    let positions = positions
        .map_err(|e| {
            tracing::warn!(error = %e, "Positions fetch failed");
            e.to_string()
        })?
        .iter()
        .map(|p| normalize_position("", p))
        .collect();

    Ok((account, positions))
}

fn spawn_remarks_save(
    records: &RecordsClient,
    request: RemarksSaveRequest,
    tx: &mpsc::Sender<AppEvent>,
) {
    let records = records.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = records
            .update_remarks(request.record_id, &request.text)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, record_id = request.record_id, "Remarks save failed");
                e.to_string()
            });
        let _ = tx
            .send(AppEvent::RemarksSaved {
                record_id: request.record_id,
                result,
            })
            .await;
    });
}

fn spawn_trades_refresh(broker: &BrokerClient, tx: &mpsc::Sender<TradesUpdate>) {
    let broker = broker.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let update = trades_poller::fetch_active_trades(&broker).await;
        let _ = tx.send(update).await;
    });
}

fn poll_keys(
    app: &mut App,
    records: &RecordsClient,
    broker: &BrokerClient,
    event_tx: &mpsc::Sender<AppEvent>,
    trades_tx: &mpsc::Sender<TradesUpdate>,
) -> anyhow::Result<()> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.on_key(key, records, broker, event_tx, trades_tx);
            }
        }
    }
    Ok(())
}

/// Bring up the terminal, run the dashboard until quit, and restore the
/// terminal even when the loop errors.
pub async fn run(
    config: AppConfig,
    records: RecordsClient,
    broker: BrokerClient,
) -> anyhow::Result<()> {
    let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(64);
    let (trades_tx, mut trades_rx) = mpsc::channel::<TradesUpdate>(8);

    {
        let poller_client = broker.clone();
        let poller_tx = trades_tx.clone();
        let interval_secs = config.trades_poll_interval_secs;
        tokio::spawn(async move {
            trades_poller::run_trades_poller(poller_client, interval_secs, poller_tx).await;
        });
    }

    let mut app = App::new(&config);
    let ticket = app.analysis.refresh();
    spawn_analyses_fetch(&records, ticket, &event_tx);
    spawn_account_fetch(&broker, &event_tx);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut input_tick = tokio::time::interval(Duration::from_millis(100));
    let loop_result: anyhow::Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| render::draw(frame, &app)) {
            break Err(e.into());
        }

        tokio::select! {
            _ = input_tick.tick() => {
                if let Err(e) = poll_keys(&mut app, &records, &broker, &event_tx, &trades_tx) {
                    break Err(e);
                }
                app.tick(Instant::now());
            }
            Some(update) = trades_rx.recv() => {
                app.trades.apply_snapshot(update, Local::now());
            }
            Some(event) = event_rx.recv() => {
                app.on_event(event, Instant::now());
            }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Dropping trades_rx on the way out stops the poller; restore the
    // terminal regardless of how the loop ended.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    loop_result
}
