//! Optimistic remarks editing. The pending text is applied locally before
//! the write resolves and is retained even when the write fails — reverting
//! would throw away the user's typing. A failed save therefore leaves the
//! client ahead of the server; the persistent error indicator is what tells
//! the user so.

use std::time::{Duration, Instant};

const SUCCESS_VISIBLE: Duration = Duration::from_secs(3);

/// What the remarks control should show next to the save button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveIndicator {
    None,
    Saving,
    /// Auto-clears after three seconds.
    Saved,
    /// Persistent until the next save attempt or record switch.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarksSaveRequest {
    pub record_id: i64,
    pub text: String,
}

/// Editor state for the remarks of one record.
#[derive(Debug, Clone)]
pub struct RemarksForm {
    record_id: i64,
    pub text: String,
    saving: bool,
    indicator: SaveIndicator,
    saved_until: Option<Instant>,
}

impl RemarksForm {
    pub fn new(record_id: i64, initial: &str) -> Self {
        Self {
            record_id,
            text: initial.to_string(),
            saving: false,
            indicator: SaveIndicator::None,
            saved_until: None,
        }
    }

    pub fn record_id(&self) -> i64 {
        self.record_id
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn indicator(&self) -> &SaveIndicator {
        &self.indicator
    }

    pub fn insert_char(&mut self, ch: char) {
        if !self.saving {
            self.text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if !self.saving {
            self.text.pop();
        }
    }

    /// Start a save. Returns `None` while another save for this record is
    /// in flight — the single-flight guard that replaces the original's
    /// disabled submit button.
    pub fn begin_save(&mut self) -> Option<RemarksSaveRequest> {
        if self.saving {
            return None;
        }
        self.saving = true;
        self.indicator = SaveIndicator::Saving;
        self.saved_until = None;
        Some(RemarksSaveRequest {
            record_id: self.record_id,
            text: self.text.clone(),
        })
    }

    /// Apply the backend's acknowledgement. Responses for a different
    /// record (the user switched away mid-flight) are ignored.
    pub fn finish_save(&mut self, record_id: i64, result: Result<(), String>, now: Instant) {
        if record_id != self.record_id {
            return;
        }
        self.saving = false;
        match result {
            Ok(()) => {
                self.indicator = SaveIndicator::Saved;
                self.saved_until = Some(now + SUCCESS_VISIBLE);
            }
            Err(message) => {
                // The optimistic text stays; only the indicator changes.
                self.indicator = SaveIndicator::Failed(message);
                self.saved_until = None;
            }
        }
    }

    /// Expire the transient success indicator. Failure indicators never
    /// expire on their own.
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.saved_until {
            if now >= until {
                self.indicator = SaveIndicator::None;
                self.saved_until = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_save_is_single_flight() {
        let mut form = RemarksForm::new(1002, "note");
        let first = form.begin_save();
        assert!(first.is_some());
        assert!(form.is_saving());
        assert!(form.begin_save().is_none());
    }

    #[test]
    fn test_success_indicator_expires() {
        let mut form = RemarksForm::new(1002, "note");
        form.begin_save().unwrap();

        let now = Instant::now();
        form.finish_save(1002, Ok(()), now);
        assert!(!form.is_saving());
        assert_eq!(*form.indicator(), SaveIndicator::Saved);

        form.tick(now + Duration::from_secs(2));
        assert_eq!(*form.indicator(), SaveIndicator::Saved);

        form.tick(now + Duration::from_secs(4));
        assert_eq!(*form.indicator(), SaveIndicator::None);
    }

    #[test]
    fn test_failure_keeps_text_and_indicator() {
        let mut form = RemarksForm::new(1002, "");
        form.insert_char('n');
        form.insert_char('o');
        form.insert_char('t');
        form.insert_char('e');
        form.begin_save().unwrap();

        let now = Instant::now();
        form.finish_save(1002, Err("HTTP 500".into()), now);

        assert_eq!(form.text, "note");
        assert!(!form.is_saving());
        assert_eq!(*form.indicator(), SaveIndicator::Failed("HTTP 500".into()));

        // Failure indicators do not auto-dismiss.
        form.tick(now + Duration::from_secs(60));
        assert_eq!(*form.indicator(), SaveIndicator::Failed("HTTP 500".into()));
    }

    #[test]
    fn test_response_for_other_record_is_ignored() {
        let mut form = RemarksForm::new(1002, "note");
        form.begin_save().unwrap();
        form.finish_save(9999, Ok(()), Instant::now());
        assert!(form.is_saving());
    }

    #[test]
    fn test_editing_is_locked_while_saving() {
        let mut form = RemarksForm::new(1002, "a");
        form.begin_save().unwrap();
        form.insert_char('b');
        form.backspace();
        assert_eq!(form.text, "a");
    }

    #[test]
    fn test_save_after_failure_is_allowed() {
        let mut form = RemarksForm::new(1002, "note");
        form.begin_save().unwrap();
        form.finish_save(1002, Err("boom".into()), Instant::now());
        assert!(form.begin_save().is_some());
        assert_eq!(*form.indicator(), SaveIndicator::Saving);
    }
}
