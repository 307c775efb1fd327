//! KeyboardMiddleware - translates raw key events into domain actions
//!
//! There is a single screen and no text input, so translation is a flat
//! keymap: quit keys, a refresh key, and vim/arrow cursor movement.
//! Cursor movement is UI-only; selecting a row triggers no domain event.

use crate::actions::{Action, GlobalAction, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate a key event into an action, if any
    fn translate(&self, key: &KeyEvent) -> Option<Action> {
        // Ctrl+C: emergency quit - always works
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Global(GlobalAction::Quit));
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Global(GlobalAction::Quit),
            // Re-issues the search, even while one is already in flight
            KeyCode::Char('r') => Action::Search(SearchAction::Load),
            KeyCode::Char('j') | KeyCode::Down => Action::Search(SearchAction::NavigateNext),
            KeyCode::Char('k') | KeyCode::Up => Action::Search(SearchAction::NavigatePrevious),
            KeyCode::Char('g') | KeyCode::Home => Action::Search(SearchAction::NavigateToTop),
            KeyCode::Char('G') | KeyCode::End => Action::Search(SearchAction::NavigateToBottom),
            _ => return None,
        };
        Some(action)
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept raw key presses
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            if let Some(translated) = self.translate(key) {
                dispatcher.dispatch(translated);
            }
            return false; // Raw key events never reach the reducer
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            code,
            KeyModifiers::NONE,
        )))
    }

    #[test]
    fn test_refresh_key_dispatches_load() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        let state = AppState::default();

        let consumed = !middleware.handle(&key(KeyCode::Char('r')), &state, &dispatcher);
        assert!(consumed);
        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Search(SearchAction::Load)
        ));
    }

    #[test]
    fn test_quit_keys() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        let state = AppState::default();

        middleware.handle(&key(KeyCode::Char('q')), &state, &dispatcher);
        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Global(GlobalAction::Quit)
        ));

        middleware.handle(&key(KeyCode::Esc), &state, &dispatcher);
        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Global(GlobalAction::Quit)
        ));

        let ctrl_c = Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        middleware.handle(&ctrl_c, &state, &dispatcher);
        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Global(GlobalAction::Quit)
        ));
    }

    #[test]
    fn test_navigation_keys() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        let state = AppState::default();

        middleware.handle(&key(KeyCode::Char('j')), &state, &dispatcher);
        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Search(SearchAction::NavigateNext)
        ));

        middleware.handle(&key(KeyCode::Up), &state, &dispatcher);
        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::Search(SearchAction::NavigatePrevious)
        ));
    }

    #[test]
    fn test_unknown_key_is_consumed_without_dispatch() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        let state = AppState::default();

        let consumed = !middleware.handle(&key(KeyCode::Char('x')), &state, &dispatcher);
        assert!(consumed);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        let state = AppState::default();

        assert!(middleware.handle(&Action::Search(SearchAction::Load), &state, &dispatcher));
    }
}
