use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod search_view;

/// Render the entire application UI
///
/// The application has a single screen; rendering is a pure function of
/// state.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    search_view::render(state, area, f);
}
