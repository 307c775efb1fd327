//! Repository search view
//!
//! Renders an indeterminate spinner while a search is in flight, the
//! repository table otherwise. All cell text and styles come from the
//! view model.

use crate::state::AppState;
use crate::view_models::RepoTableViewModel;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Spinner frames advanced by Tick actions
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Render the search screen
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    if state.search.is_loading {
        render_loading(state, area, f);
    } else {
        render_repo_table(state, area, f);
    }
}

/// Render the loading state with an indeterminate spinner
fn render_loading(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let frame_char = SPINNER_FRAMES[state.search.spinner_frame % SPINNER_FRAMES.len()];

    let block = Block::bordered()
        .border_type(BorderType::QuadrantOutside)
        .border_style(Style::default().fg(theme.accent_primary));

    let paragraph = Paragraph::new(format!("{} Loading...", frame_char))
        .block(block)
        .style(theme.muted())
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Render the repository table
fn render_repo_table(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = RepoTableViewModel::from_state(&state.search, theme);

    // Block with title and right-aligned status
    let status_line = Line::from(vm.status_text.clone())
        .style(Style::default().fg(vm.status_color))
        .right_aligned();

    let block = Block::bordered()
        .border_type(BorderType::QuadrantOutside)
        .border_style(Style::default().fg(theme.accent_primary))
        .title(vm.title.clone())
        .title(status_line);

    // Header row
    let header_style = theme.table_header();
    let header_cells = ["Repository", "Stars", "Language", "Description"]
        .into_iter()
        .map(|h| Cell::from(h).style(header_style));
    let header = Row::new(header_cells).style(header_style).height(1);

    // Rows from the view model
    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row_vm| {
            let style = Style::default().fg(row_vm.fg_color).bg(row_vm.bg_color);
            Row::new(vec![
                Cell::from(row_vm.full_name.clone()),
                Cell::from(format!("{:>7}", row_vm.stars)),
                Cell::from(row_vm.language.clone()),
                Cell::from(row_vm.description.clone()),
            ])
            .style(style)
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Percentage(30), // Repository
        Constraint::Length(7),      // Stars
        Constraint::Length(12),     // Language
        Constraint::Min(0),         // Description
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(Some(vm.selected_index));

    f.render_stateful_widget(table, area, &mut table_state);
}
