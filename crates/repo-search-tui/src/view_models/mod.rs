//! View models
//!
//! Pre-compute display text and styles so views only lay out widgets.

pub mod repo_table_view_model;

pub use repo_table_view_model::{RepoRowViewModel, RepoTableViewModel};
