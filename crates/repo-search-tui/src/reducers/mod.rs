//! Reducers - pure functions that produce new state from state + action

pub mod app_reducer;
pub mod search_reducer;
