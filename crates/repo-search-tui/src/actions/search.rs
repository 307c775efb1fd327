//! Repository search screen actions

use repo_search_client::Repo;

/// Actions for the repository search screen
#[derive(Debug, Clone)]
pub enum SearchAction {
    // Loading
    /// Start a search for the configured query.
    ///
    /// Dispatched on screen presentation and on the refresh key.
    /// Re-dispatching while a search is in flight issues another request;
    /// results apply last-resolved-wins.
    Load,
    /// Search completed successfully - replaces the rows wholesale
    Loaded(Vec<Repo>),
    /// Search failed (message is logged, never rendered)
    LoadError(String),

    // Navigation (UI cursor only, no domain effect)
    /// Navigate to next repository in the table
    NavigateNext,
    /// Navigate to previous repository in the table
    NavigatePrevious,
    /// Navigate to top of the list
    NavigateToTop,
    /// Navigate to bottom of the list
    NavigateToBottom,
}
