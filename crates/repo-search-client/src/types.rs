//! Wire types for the repository search endpoint
//!
//! Field names mirror the snake_case wire format. The envelope carries
//! more fields than `items` (total_count, incomplete_results); everything
//! but `items` is ignored.

use serde::{Deserialize, Serialize};

/// A repository returned by the search endpoint
///
/// Immutable value; the application replaces its collection wholesale on
/// every successful search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Stable unique identifier
    pub id: u64,
    /// Display name in "owner/name" form
    pub full_name: String,
    /// Description (null on the wire when absent)
    #[serde(default)]
    pub description: Option<String>,
    /// Star count
    pub stargazers_count: u64,
    /// Primary language (null on the wire when absent)
    #[serde(default)]
    pub language: Option<String>,
}

/// Response envelope of the search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRepositoriesResponse {
    pub items: Vec<Repo>,
}

/// Query parameters for the search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams<'a> {
    pub q: &'a str,
    pub sort: &'a str,
}
