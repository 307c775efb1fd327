//! Event types
//!
//! Events represent facts/observations that have occurred and should be
//! broadcast to the middleware chain. Unlike commands (imperative
//! actions), events allow middleware to react to what happened elsewhere
//! in the system. They are never forwarded to reducers.
//!
//! ## Naming Convention
//!
//! Events use past tense or descriptive names indicating something has
//! happened: `ScreenPresented` (not `PresentScreen`).

/// Events that re-enter the middleware chain
#[derive(Debug, Clone)]
pub enum Event {
    /// The terminal screen has been presented
    ///
    /// Broadcast once per presentation; the search middleware reacts by
    /// dispatching the initial load.
    ScreenPresented,
}
