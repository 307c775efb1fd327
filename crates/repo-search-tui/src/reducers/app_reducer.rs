use crate::actions::{Action, GlobalAction};
use crate::state::AppState;

use super::search_reducer;

/// Root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::Tick) => {
            state.search.spinner_frame = state.search.spinner_frame.wrapping_add(1);
        }
        Action::Global(GlobalAction::KeyPressed(_)) => {
            // consumed by KeyboardMiddleware, nothing to reduce
        }
        Action::Search(search_action) => {
            state.search = search_reducer::reduce_search(state.search, search_action);
        }
        Action::Event(_) => {
            // events are middleware-only observations
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_stops_running() {
        let state = AppState::default();
        assert!(state.running);

        let state = reduce(state, &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_tick_advances_spinner() {
        let state = AppState::default();
        let frame = state.search.spinner_frame;

        let state = reduce(state, &Action::Global(GlobalAction::Tick));
        assert_eq!(state.search.spinner_frame, frame + 1);
    }

    #[test]
    fn test_unrelated_actions_are_noops() {
        let state = AppState::new("language:rust");
        let before = state.clone();

        let state = reduce(state, &Action::event(crate::actions::Event::ScreenPresented));
        assert!(state.running);
        assert_eq!(state.search.repos, before.search.repos);
        assert_eq!(state.search.is_loading, before.search.is_loading);
    }
}
