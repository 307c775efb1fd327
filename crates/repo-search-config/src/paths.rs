//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/repo-search/`, `~/.cache/repo-search/`
//! - macOS: `~/Library/Application Support/repo-search/`, `~/Library/Caches/repo-search/`
//! - Windows: `%APPDATA%\repo-search\`, `%LOCALAPPDATA%\repo-search\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "repo-search";

/// Get the application config directory
/// Returns ~/.config/repo-search/ on Linux, ~/Library/Application Support/repo-search/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/repo-search/ on Linux, ~/Library/Caches/repo-search/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
