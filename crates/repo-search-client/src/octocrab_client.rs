//! Octocrab-based search client
//!
//! Direct implementation of the `SearchClient` trait using the octocrab
//! library. One GET against the search endpoint per call; octocrab
//! serializes the parameter struct into the query string and attaches the
//! bearer credential when the instance was built with a token.

use crate::client::SearchClient;
use crate::types::{Repo, SearchParams, SearchRepositoriesResponse};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Search endpoint route
const SEARCH_ROUTE: &str = "/search/repositories";

/// Fixed sort order requested from the endpoint
const SORT_BY_STARS: &str = "stars";

/// Direct search client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client, attaching the bearer credential only when a token
    /// is present
    ///
    /// A missing token is not an error - requests are simply sent
    /// unauthenticated (subject to the lower anonymous rate limit).
    pub fn build(token: Option<String>) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token);
        }
        let octocrab = builder.build().context("Failed to build Octocrab client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl SearchClient for OctocrabClient {
    async fn search_repositories(&self, query: &str) -> anyhow::Result<Vec<Repo>> {
        debug!("Searching repositories for '{}'", query);

        let params = SearchParams {
            q: query,
            sort: SORT_BY_STARS,
        };
        let response: SearchRepositoriesResponse = self
            .octocrab
            .get(SEARCH_ROUTE, Some(&params))
            .await
            .context("Repository search request failed")?;

        debug!(
            "Search returned {} repositories for '{}'",
            response.items.len(),
            query
        );
        Ok(response.items)
    }
}
