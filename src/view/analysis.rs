use chrono::NaiveDate;

use super::remarks::{RemarksForm, RemarksSaveRequest};
use crate::format::format_date_for_query;
use crate::models::{AnalysisRecord, NormalizedBatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTab {
    Analysis,
    Prompt,
    Decision,
    Remarks,
}

impl ContentTab {
    pub fn title(self) -> &'static str {
        match self {
            ContentTab::Analysis => "Analysis",
            ContentTab::Prompt => "Analysis Prompt",
            ContentTab::Decision => "Decision",
            ContentTab::Remarks => "Remarks",
        }
    }

    pub fn all() -> &'static [ContentTab] {
        &[
            ContentTab::Analysis,
            ContentTab::Prompt,
            ContentTab::Decision,
            ContentTab::Remarks,
        ]
    }

    pub fn next(self) -> Self {
        let tabs = Self::all();
        let idx = tabs.iter().position(|&t| t == self).unwrap_or(0);
        tabs[(idx + 1) % tabs.len()]
    }

    pub fn prev(self) -> Self {
        let tabs = Self::all();
        let idx = tabs.iter().position(|&t| t == self).unwrap_or(0);
        tabs[(idx + tabs.len() - 1) % tabs.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTab {
    ThreeMonth,
    OneYear,
}

impl ChartTab {
    pub fn title(self) -> &'static str {
        match self {
            ChartTab::ThreeMonth => "3 Month Chart",
            ChartTab::OneYear => "1 Year Chart",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ChartTab::ThreeMonth => ChartTab::OneYear,
            ChartTab::OneYear => ChartTab::ThreeMonth,
        }
    }
}

/// Handle for an issued fetch: the generation token plus the query date.
/// A response is only applied if its token still matches the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub date: String,
}

/// State for the analyses page: the selected date, the normalized records
/// for that date, and the symbol/tab/remarks sub-state.
#[derive(Debug, Clone)]
pub struct AnalysisView {
    pub date: NaiveDate,
    pub records: Vec<AnalysisRecord>,
    pub skipped: usize,
    pub selected_symbol: Option<String>,
    pub content_tab: ContentTab,
    pub chart_tab: ChartTab,
    pub loading: bool,
    pub error: Option<String>,
    pub scroll: u16,
    pub remarks: Option<RemarksForm>,
    fetch_seq: u64,
}

impl AnalysisView {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            records: Vec::new(),
            skipped: 0,
            selected_symbol: None,
            content_tab: ContentTab::Analysis,
            chart_tab: ChartTab::ThreeMonth,
            loading: false,
            error: None,
            scroll: 0,
            remarks: None,
            fetch_seq: 0,
        }
    }

    /// Select a date. Symbol selection, remarks state, and any stale error
    /// are cleared in the same step so no old record content can show under
    /// the new date header, then a fetch ticket for the new date is issued.
    pub fn select_date(&mut self, date: NaiveDate) -> FetchTicket {
        self.date = date;
        self.selected_symbol = None;
        self.remarks = None;
        self.error = None;
        self.scroll = 0;
        self.loading = true;
        self.fetch_seq += 1;
        FetchTicket {
            seq: self.fetch_seq,
            date: format_date_for_query(date),
        }
    }

    /// Re-issue the fetch for the current date.
    pub fn refresh(&mut self) -> FetchTicket {
        self.select_date(self.date)
    }

    /// Apply a finished fetch. Responses from a superseded selection are
    /// discarded so a slow fetch can never overwrite a newer one.
    pub fn finish_load(&mut self, seq: u64, result: Result<NormalizedBatch, String>) {
        if seq != self.fetch_seq {
            tracing::debug!(seq, current = self.fetch_seq, "Discarding stale analyses response");
            return;
        }
        self.loading = false;
        match result {
            Ok(batch) => {
                if batch.skipped > 0 {
                    tracing::warn!(skipped = batch.skipped, "Fetched batch had malformed records");
                }
                self.records = batch.records;
                self.skipped = batch.skipped;
            }
            Err(message) => {
                self.records = Vec::new();
                self.skipped = 0;
                self.error = Some(message);
            }
        }
    }

    pub fn current(&self) -> Option<&AnalysisRecord> {
        let symbol = self.selected_symbol.as_deref()?;
        self.records.iter().find(|r| r.symbol == symbol)
    }

    /// Select a symbol from the fetched set. Seeds the remarks editor from
    /// the record, but only when actually switching records — an in-progress
    /// edit survives reselecting the same symbol.
    pub fn select_symbol(&mut self, symbol: &str) {
        let Some(record) = self.records.iter().find(|r| r.symbol == symbol) else {
            return;
        };
        let record_id = record.record_id;
        let remarks = record.remarks.clone();

        self.selected_symbol = Some(symbol.to_string());
        self.scroll = 0;
        if self.remarks.as_ref().map(|f| f.record_id()) != Some(record_id) {
            self.remarks = Some(RemarksForm::new(record_id, &remarks));
        }
    }

    pub fn select_next_symbol(&mut self) {
        self.step_symbol(1);
    }

    pub fn select_prev_symbol(&mut self) {
        self.step_symbol(-1);
    }

    fn step_symbol(&mut self, delta: isize) {
        if self.records.is_empty() {
            return;
        }
        let idx = self
            .selected_symbol
            .as_deref()
            .and_then(|s| self.records.iter().position(|r| r.symbol == s));
        let next = match idx {
            Some(i) => (i as isize + delta).rem_euclid(self.records.len() as isize) as usize,
            None => 0,
        };
        let symbol = self.records[next].symbol.clone();
        self.select_symbol(&symbol);
    }

    pub fn set_content_tab(&mut self, tab: ContentTab) {
        if self.content_tab != tab {
            self.content_tab = tab;
            self.scroll = 0;
        }
    }

    pub fn toggle_chart_tab(&mut self) {
        self.chart_tab = self.chart_tab.toggle();
    }

    /// Kick off a remarks save for the current record, applying the pending
    /// text optimistically to the local record before the write resolves.
    pub fn begin_remarks_save(&mut self) -> Option<RemarksSaveRequest> {
        let request = self.remarks.as_mut()?.begin_save()?;
        self.apply_remarks(request.record_id, &request.text);
        Some(request)
    }

    /// Update the remarks of one record in the local snapshot. Keyed by
    /// record id — never by the analysis identifier.
    pub fn apply_remarks(&mut self, record_id: i64, text: &str) {
        if let Some(record) = self.records.iter_mut().find(|r| r.record_id == record_id) {
            record.remarks = text.to_string();
        }
    }

    pub fn finish_remarks_save(
        &mut self,
        record_id: i64,
        result: Result<(), String>,
        now: std::time::Instant,
    ) {
        if let Some(form) = self.remarks.as_mut() {
            form.finish_save(record_id, result, now);
        }
    }

    pub fn tick(&mut self, now: std::time::Instant) {
        if let Some(form) = self.remarks.as_mut() {
            form.tick(now);
        }
    }
}
