//! GitHub repository search client
//!
//! This crate provides a trait-based client for the GitHub repository
//! search endpoint. The trait keeps the application's state machine
//! decoupled from the HTTP layer, so tests can substitute a mock
//! implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use repo_search_client::{OctocrabClient, SearchClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Token is optional - without it the request is unauthenticated
//! let client = OctocrabClient::build(None)?;
//! let repos = client.search_repositories("language:rust").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod types;

pub use client::SearchClient;
pub use octocrab_client::OctocrabClient;
pub use types::{Repo, SearchRepositoriesResponse};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
