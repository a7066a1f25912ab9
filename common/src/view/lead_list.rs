//! State machine behind the lead table.
//!
//! The view-model owns the query state (sort, filters, search, reload token)
//! and hands out a [`FetchTicket`] for every change that requires a new
//! fetch, and only for those. Callers run the fetch and feed the result back
//! through [`LeadListViewModel::apply`]; responses to anything but the most
//! recent ticket are discarded so a slow, older response cannot overwrite a
//! newer one.

use log::{debug, warn};

use super::debounce::DebounceTimer;
use crate::error::{HttpError, SESSION_EXPIRED_MESSAGE};
use crate::model::lead::{Lead, LeadStatus, Priority};
use crate::model::query::{LeadQuery, SortField, SortOrder};

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load leads. Please try again later.";

/// One list fetch to run: its sequence number and the query to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: LeadQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows replaced.
    Applied,
    /// Rows kept, error message set.
    Failed,
    /// Like `Failed`, but the server rejected the session.
    Unauthorized,
    /// A newer fetch was issued in the meantime; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct LeadListViewModel {
    sort_by: SortField,
    order: SortOrder,
    status: Option<LeadStatus>,
    priority: Option<Priority>,
    raw_search: String,
    committed_search: String,
    reload_token: u64,
    search: DebounceTimer<String>,
    rows: Vec<Lead>,
    loading: bool,
    error: Option<String>,
    last_issued: u64,
}

impl LeadListViewModel {
    pub fn new(search_debounce_ms: u64) -> Self {
        Self {
            sort_by: SortField::default(),
            order: SortOrder::default(),
            status: None,
            priority: None,
            raw_search: String::new(),
            committed_search: String::new(),
            reload_token: 0,
            search: DebounceTimer::new(search_debounce_ms),
            rows: Vec::new(),
            loading: false,
            error: None,
            last_issued: 0,
        }
    }

    pub fn rows(&self) -> &[Lead] {
        &self.rows
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn sort_by(&self) -> SortField {
        self.sort_by
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn status_filter(&self) -> Option<LeadStatus> {
        self.status
    }

    pub fn priority_filter(&self) -> Option<Priority> {
        self.priority
    }

    /// What the search box shows.
    pub fn raw_search(&self) -> &str {
        &self.raw_search
    }

    /// What the last fetch searched for.
    pub fn committed_search(&self) -> &str {
        &self.committed_search
    }

    pub fn reload_token(&self) -> u64 {
        self.reload_token
    }

    pub fn search_deadline(&self) -> Option<u64> {
        self.search.deadline()
    }

    /// The query the next fetch will send.
    pub fn query(&self) -> LeadQuery {
        let name = Some(self.committed_search.clone()).filter(|name| !name.trim().is_empty());
        LeadQuery {
            sort_by: self.sort_by,
            order: self.order,
            status: self.status,
            priority: self.priority,
            name,
        }
    }

    /// Initial load.
    pub fn start(&mut self) -> FetchTicket {
        self.issue()
    }

    pub fn set_sort_by(&mut self, sort_by: SortField) -> Option<FetchTicket> {
        if self.sort_by == sort_by {
            return None;
        }
        self.sort_by = sort_by;
        Some(self.issue())
    }

    pub fn set_order(&mut self, order: SortOrder) -> Option<FetchTicket> {
        if self.order == order {
            return None;
        }
        self.order = order;
        Some(self.issue())
    }

    pub fn set_status_filter(&mut self, status: Option<LeadStatus>) -> Option<FetchTicket> {
        if self.status == status {
            return None;
        }
        self.status = status;
        Some(self.issue())
    }

    pub fn set_priority_filter(&mut self, priority: Option<Priority>) -> Option<FetchTicket> {
        if self.priority == priority {
            return None;
        }
        self.priority = priority;
        Some(self.issue())
    }

    /// Records a keystroke in the search box and restarts the quiet window.
    /// Returns the time at which [`poll_search`](Self::poll_search) will
    /// commit it.
    pub fn input_search(&mut self, text: impl Into<String>, now_ms: u64) -> u64 {
        let text = text.into();
        self.raw_search = text.clone();
        self.search.restart(text, now_ms)
    }

    /// Commits the pending search text if the quiet window has elapsed. A
    /// ticket is returned only when the committed value actually changed.
    pub fn poll_search(&mut self, now_ms: u64) -> Option<FetchTicket> {
        let text = self.search.poll(now_ms)?;
        if text == self.committed_search {
            return None;
        }
        self.committed_search = text;
        Some(self.issue())
    }

    /// Follows an externally owned reload signal.
    pub fn set_reload_token(&mut self, token: u64) -> Option<FetchTicket> {
        if self.reload_token == token {
            return None;
        }
        self.reload_token = token;
        Some(self.issue())
    }

    pub fn reload(&mut self) -> FetchTicket {
        self.reload_token = self.reload_token.wrapping_add(1);
        self.issue()
    }

    /// Feeds back the result of the fetch identified by `seq`.
    pub fn apply(&mut self, seq: u64, result: Result<Vec<Lead>, HttpError>) -> FetchOutcome {
        if seq != self.last_issued {
            debug!(
                "discarding lead response #{} (latest is #{})",
                seq, self.last_issued
            );
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
                FetchOutcome::Applied
            }
            Err(err) if err.is_unauthorized() => {
                warn!("lead list rejected: {}", err);
                self.error = Some(SESSION_EXPIRED_MESSAGE.to_string());
                FetchOutcome::Unauthorized
            }
            Err(err) => {
                warn!("lead list failed: {}", err);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                FetchOutcome::Failed
            }
        }
    }

    fn issue(&mut self) -> FetchTicket {
        self.last_issued += 1;
        self.loading = true;
        FetchTicket {
            seq: self.last_issued,
            query: self.query(),
        }
    }
}
