//! View model for the repository table
//!
//! Separates presentation logic from domain models and view rendering.
//! Pre-computes all display text, colors, and styles in the view model.

use crate::state::SearchState;
use crate::theme::Theme;
use ratatui::style::Color;
use repo_search_client::Repo;

/// View model for the entire repository table
#[derive(Debug, Clone)]
pub struct RepoTableViewModel {
    /// Title text: "Repositories: <query>"
    pub title: String,
    /// Status text: "Updated 12:00:01 [r to refresh]", etc.
    pub status_text: String,
    /// Status color (from theme)
    pub status_color: Color,
    /// Pre-computed rows ready to display
    pub rows: Vec<RepoRowViewModel>,
    /// Current cursor position (for keyboard navigation)
    pub selected_index: usize,
}

/// View model for a single repository row
///
/// Derived one-to-one from a `Repo`; identity is the repository id.
#[derive(Debug, Clone)]
pub struct RepoRowViewModel {
    /// Source repository identifier
    pub id: u64,
    /// Pre-formatted cell texts
    pub full_name: String,
    pub stars: String,
    pub language: String,    // blank when absent
    pub description: String, // blank when absent

    /// Pre-computed styles
    pub fg_color: Color,
    pub bg_color: Color,
}

impl RepoTableViewModel {
    /// Transform search state into a display-ready view model
    pub fn from_state(state: &SearchState, theme: &Theme) -> Self {
        let rows = state
            .repos
            .iter()
            .enumerate()
            .map(|(index, repo)| Self::build_row(repo, index, state.selected, theme))
            .collect();

        let (status_text, status_color) = match state.last_updated {
            Some(timestamp) => (
                format!("Updated {} [r to refresh]", timestamp.format("%H:%M:%S")),
                Color::Green,
            ),
            None => ("[r to refresh]".to_string(), theme.muted_fg),
        };

        Self {
            title: format!("  Repositories: {} ", state.query),
            status_text,
            status_color,
            rows,
            selected_index: state.selected,
        }
    }

    fn build_row(repo: &Repo, index: usize, cursor_index: usize, theme: &Theme) -> RepoRowViewModel {
        let is_cursor = index == cursor_index;

        let (fg_color, bg_color) = if is_cursor {
            (theme.active_fg, theme.selected_bg)
        } else {
            // Alternating row colors
            let bg = if index % 2 == 0 {
                Color::Reset
            } else {
                Color::Rgb(30, 30, 40)
            };
            (theme.text_fg, bg)
        };

        RepoRowViewModel {
            id: repo.id,
            full_name: repo.full_name.clone(),
            stars: repo.stargazers_count.to_string(),
            language: repo.language.clone().unwrap_or_default(),
            description: repo.description.clone().unwrap_or_default(),
            fg_color,
            bg_color,
        }
    }
}
