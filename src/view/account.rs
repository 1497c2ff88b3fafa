use crate::models::{AccountSnapshot, PositionRecord};

/// State for the account page: the snapshot plus the open-positions list
/// fetched alongside it.
#[derive(Debug, Clone, Default)]
pub struct AccountView {
    pub account: Option<AccountSnapshot>,
    pub positions: Vec<PositionRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AccountView {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    pub fn start_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(
        &mut self,
        result: Result<(AccountSnapshot, Vec<PositionRecord>), String>,
    ) {
        self.loading = false;
        match result {
            Ok((account, positions)) => {
                self.account = Some(account);
                self.positions = positions;
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }
}
