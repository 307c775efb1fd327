//! Search reducer
//!
//! Handles state updates for the repository search screen. The fetch
//! itself is a side effect executed by SearchMiddleware; this reducer
//! only tracks the loading flag and the row collection.

use crate::actions::SearchAction;
use crate::state::SearchState;

/// Reduce search screen state based on actions
pub fn reduce_search(mut state: SearchState, action: &SearchAction) -> SearchState {
    match action {
        SearchAction::Load => {
            state.is_loading = true;
            log::debug!("Search started for '{}'", state.query);
        }

        SearchAction::Loaded(repos) => {
            // Replace rows wholesale, preserving response order
            state.is_loading = false;
            state.repos = repos.clone();
            state.selected = 0;
            state.last_updated = Some(chrono::Local::now());
            log::info!("Loaded {} repositories for '{}'", repos.len(), state.query);
        }

        SearchAction::LoadError(error) => {
            // Diagnostics only: prior rows stay untouched and on screen
            state.is_loading = false;
            log::error!("Failed to load repositories for '{}': {}", state.query, error);
        }

        SearchAction::NavigateNext => {
            if !state.repos.is_empty() {
                state.selected = (state.selected + 1) % state.repos.len();
            }
        }

        SearchAction::NavigatePrevious => {
            if !state.repos.is_empty() {
                state.selected = if state.selected == 0 {
                    state.repos.len() - 1
                } else {
                    state.selected - 1
                };
            }
        }

        SearchAction::NavigateToTop => {
            state.selected = 0;
        }

        SearchAction::NavigateToBottom => {
            if !state.repos.is_empty() {
                state.selected = state.repos.len() - 1;
            }
        }
    }

    state
}
