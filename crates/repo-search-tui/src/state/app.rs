//! Application State

use crate::theme::Theme;

use super::SearchState;

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub search: SearchState,
    pub theme: Theme,
}

impl AppState {
    /// Create the initial state for the given search query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            running: true,
            search: SearchState::new(query),
            theme: Theme::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(String::new())
    }
}
