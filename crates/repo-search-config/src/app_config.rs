//! Application configuration
//!
//! Configuration loaded from the .repo-search.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .repo-search.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Search query sent to the repository search endpoint
    #[serde(default = "default_query")]
    pub query: String,

    /// Bearer credential for the search API
    ///
    /// Optional; when absent `resolve_token` falls back to the
    /// GITHUB_TOKEN / GH_TOKEN environment variables.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_query() -> String {
    "language:rust".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            query: default_query(),
            token: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Resolve the search API credential
    ///
    /// Resolution order:
    /// 1. `token` from the config file
    /// 2. `GITHUB_TOKEN` environment variable
    /// 3. `GH_TOKEN` environment variable
    ///
    /// Absence is not an error; requests simply go out unauthenticated.
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
            .or_else(|| std::env::var("GH_TOKEN").ok())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.query, "language:rust");
        assert!(config.token.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            query = "topic:tui"
            token = "ghp_dummy"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.query, "topic:tui");
        assert_eq!(config.token.as_deref(), Some("ghp_dummy"));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            query = "stars:>1000"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.query, "stars:>1000");
        // token should use default
        assert!(config.token.is_none());
    }

    #[test]
    fn test_resolve_token_prefers_config() {
        let config = AppConfig {
            query: default_query(),
            token: Some("from-config".to_string()),
        };
        assert_eq!(config.resolve_token().as_deref(), Some("from-config"));
    }

    #[test]
    fn test_resolve_token_ignores_empty() {
        let config = AppConfig {
            query: default_query(),
            token: Some(String::new()),
        };
        // An empty config token must not produce an empty Authorization header
        let resolved = config.resolve_token();
        assert_ne!(resolved.as_deref(), Some(""));
    }
}
