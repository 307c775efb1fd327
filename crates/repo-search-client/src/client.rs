//! Search client trait
//!
//! Defines the interface the application consumes for repository search.
//! Implementations can be direct (hitting the API) or mocks for tests.

use crate::types::Repo;
use async_trait::async_trait;

/// Repository search client trait
///
/// A single opaque asynchronous call with exactly one resolution per
/// invocation: the decoded repository list on success, or an error
/// covering both transport and decode failures.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Search repositories matching the given query, sorted by stars
    ///
    /// # Arguments
    ///
    /// * `query` - The search query term (e.g., "language:rust")
    ///
    /// # Returns
    ///
    /// Repositories in the order the endpoint returned them, or an error
    /// if the request or the response decode fails. A decode failure
    /// discards the entire batch - there is no partial success.
    async fn search_repositories(&self, query: &str) -> anyhow::Result<Vec<Repo>>;
}
