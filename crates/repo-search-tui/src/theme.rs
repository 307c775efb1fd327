//! Color theme
//!
//! Central palette consumed by views and view models.

use ratatui::style::{Color, Modifier, Style};

/// Application color theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent used for borders and the table header
    pub accent_primary: Color,
    /// Background of the cursor row
    pub selected_bg: Color,
    /// Foreground of the cursor row
    pub active_fg: Color,
    /// Default text color
    pub text_fg: Color,
    /// De-emphasized text color
    pub muted_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_primary: Color::Cyan,
            selected_bg: Color::Rgb(50, 60, 80),
            active_fg: Color::White,
            text_fg: Color::Gray,
            muted_fg: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_fg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted_fg)
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_selected(&self) -> Style {
        Style::default()
            .fg(self.active_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }
}
