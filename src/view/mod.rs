pub mod account;
pub mod analysis;
pub mod remarks;
pub mod trades;

pub use account::AccountView;
pub use analysis::{AnalysisView, ChartTab, ContentTab, FetchTicket};
pub use remarks::{RemarksForm, RemarksSaveRequest, SaveIndicator};
pub use trades::{SortColumn, SortDirection, TradeFilter, TradesView};

/// Top-level pages, one per backed screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Analysis,
    Trades,
    Account,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Analysis => "Analysis",
            Page::Trades => "Trades",
            Page::Account => "Account",
        }
    }

    pub fn all() -> &'static [Page] {
        &[Page::Analysis, Page::Trades, Page::Account]
    }
}
