//! Search middleware
//!
//! Owns the tokio runtime and the search client. Reacts to the
//! screen-presented event by dispatching the initial load, and executes
//! one fetch task per Load action. Requests are fire-and-forget: no
//! de-duplication, cancellation, or timeout. A request superseded by a
//! newer Load still delivers its result (last-resolved-wins).

use crate::actions::{Action, Event, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use repo_search_client::{OctocrabClient, SearchClient};
use repo_search_config::AppConfig;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for the repository search side effect
pub struct SearchMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    /// Search client (trait object so tests can substitute a mock)
    client: Arc<dyn SearchClient>,
}

impl SearchMiddleware {
    /// Create a new search middleware from the application config
    ///
    /// The bearer credential is attached only when the config resolves a
    /// token; absence means unauthenticated requests.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = OctocrabClient::build(config.resolve_token())?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create a middleware with a specific client
    pub fn with_client(client: Arc<dyn SearchClient>) -> Self {
        let runtime = Runtime::new().expect("Failed to create tokio runtime");
        Self { runtime, client }
    }

    /// Spawn exactly one fetch task for the given query
    fn spawn_search(&self, query: &str, dispatcher: &Dispatcher) {
        log::info!("Spawning search task for '{}'", query);

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let query = query.to_string();

        self.runtime.spawn(async move {
            match client.search_repositories(&query).await {
                Ok(repos) => {
                    log::info!("Search for '{}' returned {} repositories", query, repos.len());
                    dispatcher.dispatch(Action::Search(SearchAction::Loaded(repos)));
                }
                Err(e) => {
                    log::error!("Search for '{}' failed: {}", query, e);
                    dispatcher.dispatch(Action::Search(SearchAction::LoadError(e.to_string())));
                }
            }
        });
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            // The screen is up - issue the initial load
            Action::Event(Event::ScreenPresented) => {
                dispatcher.dispatch(Action::Search(SearchAction::Load));
                true
            }

            Action::Search(SearchAction::Load) => {
                self.spawn_search(&state.search.query, dispatcher);
                true // Let the action pass through so the reducer sets the loading flag
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use repo_search_client::Repo;
    use std::sync::mpsc;
    use std::time::Duration;

    struct StaticClient {
        repos: Vec<Repo>,
    }

    #[async_trait]
    impl SearchClient for StaticClient {
        async fn search_repositories(&self, _query: &str) -> anyhow::Result<Vec<Repo>> {
            Ok(self.repos.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl SearchClient for FailingClient {
        async fn search_repositories(&self, _query: &str) -> anyhow::Result<Vec<Repo>> {
            Err(anyhow::anyhow!("boom"))
        }
    }

    fn repo(id: u64, full_name: &str) -> Repo {
        Repo {
            id,
            full_name: full_name.to_string(),
            description: None,
            stargazers_count: 0,
            language: None,
        }
    }

    fn recv(rx: &mpsc::Receiver<Action>) -> Action {
        rx.recv_timeout(Duration::from_secs(5))
            .expect("expected a dispatched action")
    }

    #[test]
    fn test_load_schedules_one_fetch_and_passes_through() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = SearchMiddleware::with_client(Arc::new(StaticClient {
            repos: vec![repo(1, "a/b")],
        }));
        let state = AppState::new("language:rust");

        let pass = middleware.handle(&Action::Search(SearchAction::Load), &state, &dispatcher);
        assert!(pass, "Load must reach the reducer to set the loading flag");

        match recv(&rx) {
            Action::Search(SearchAction::Loaded(repos)) => {
                assert_eq!(repos.len(), 1);
                assert_eq!(repos[0].id, 1);
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
        // Exactly one response per Load
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn test_failure_dispatches_load_error() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = SearchMiddleware::with_client(Arc::new(FailingClient));
        let state = AppState::new("language:rust");

        middleware.handle(&Action::Search(SearchAction::Load), &state, &dispatcher);

        match recv(&rx) {
            Action::Search(SearchAction::LoadError(message)) => {
                assert!(message.contains("boom"));
            }
            other => panic!("expected LoadError, got {:?}", other),
        }
    }

    #[test]
    fn test_screen_presented_dispatches_load() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = SearchMiddleware::with_client(Arc::new(StaticClient { repos: vec![] }));
        let state = AppState::new("language:rust");

        let pass = middleware.handle(&Action::event(Event::ScreenPresented), &state, &dispatcher);
        assert!(pass);

        assert!(matches!(recv(&rx), Action::Search(SearchAction::Load)));
    }

    #[test]
    fn test_redundant_loads_each_schedule_a_fetch() {
        // No de-duplication: two Loads produce two responses
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = SearchMiddleware::with_client(Arc::new(StaticClient {
            repos: vec![repo(1, "a/b")],
        }));
        let state = AppState::new("language:rust");

        middleware.handle(&Action::Search(SearchAction::Load), &state, &dispatcher);
        middleware.handle(&Action::Search(SearchAction::Load), &state, &dispatcher);

        for _ in 0..2 {
            assert!(matches!(
                recv(&rx),
                Action::Search(SearchAction::Loaded(_))
            ));
        }
    }
}
