//! Search screen state

use chrono::{DateTime, Local};
use repo_search_client::Repo;

/// Repository search screen state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Query term sent to the search endpoint
    pub query: String,
    /// Repositories from the most recent successful search, in response order
    ///
    /// Failed searches leave this untouched.
    pub repos: Vec<Repo>,
    /// True between a Load action and its response action
    pub is_loading: bool,
    /// Cursor position in the table (UI only, no domain effect)
    pub selected: usize,
    /// Timestamp of the last successful load
    pub last_updated: Option<DateTime<Local>>,
    /// Frame counter for the loading spinner
    pub spinner_frame: usize,
}

impl SearchState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}
