//! Global actions - not tied to any specific screen

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
    /// Periodic tick driving the loading spinner
    Tick,
}
