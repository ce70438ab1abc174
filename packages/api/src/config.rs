//! # Client configuration (`snippetflow.toml`)
//!
//! Where the backend lives. The browser build usually talks to its own origin
//! (the backend is reverse-proxied next to the static files), so the default
//! `base_url` is empty and every request path stays relative.
//!
//! ```toml
//! base_url = "https://api.snippetflow.dev"   # empty = same origin
//! graphql_path = "/graphql"
//! ```
//!
//! The web binary bakes its configuration in at compile time through
//! [`ApiConfig::from_build_env`]. Native builds read `snippetflow.toml` from
//! the working directory when present ([`ApiConfig::from_toml_or`]).

use serde::{Deserialize, Serialize};

/// Backend location for the REST and GraphQL clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the REST API. Empty string means same origin.
    #[serde(default)]
    pub base_url: String,
    /// Path of the GraphQL endpoint, relative to `base_url`.
    #[serde(default = "default_graphql_path")]
    pub graphql_path: String,
}

fn default_graphql_path() -> String {
    "/graphql".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            graphql_path: default_graphql_path(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at `base_url` with the default GraphQL path.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the GraphQL path.
    pub fn with_graphql_path(mut self, path: impl Into<String>) -> Self {
        self.graphql_path = path.into();
        self
    }

    /// Configuration captured from `SNIPPETFLOW_API_URL` and
    /// `SNIPPETFLOW_GRAPHQL_PATH` when the crate was compiled.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("SNIPPETFLOW_API_URL") {
            config.base_url = url.to_string();
        }
        if let Some(path) = option_env!("SNIPPETFLOW_GRAPHQL_PATH") {
            config.graphql_path = path.to_string();
        }
        config
    }

    /// Fill an empty `base_url` with `origin` (the page origin in the browser).
    ///
    /// The HTTP client only accepts absolute URLs, so a same-origin config must
    /// be resolved before it is handed to [`crate::ApiClient`].
    pub fn resolved_against(mut self, origin: &str) -> Self {
        if self.base_url.trim().is_empty() {
            self.base_url = origin.to_string();
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "snippetflow.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse `snippetflow.toml` contents, keeping `fallback` when there is no
    /// file or it does not parse.
    pub fn from_toml_or(source: Option<&str>, fallback: Self) -> Self {
        let Some(source) = source else {
            return fallback;
        };
        match Self::from_toml(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", Self::filename(), e);
                fallback
            }
        }
    }

    /// Absolute (or same-origin) URL of a REST path.
    pub fn rest_url(&self, path: &str) -> String {
        join(&self.base_url, path)
    }

    /// Absolute (or same-origin) URL of the GraphQL endpoint.
    pub fn graphql_url(&self) -> String {
        join(&self.base_url, &self.graphql_path)
    }
}

fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = ApiConfig::from_toml("").unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.graphql_url(), "/graphql");
        assert_eq!(config.rest_url("/auth/login"), "/auth/login");
    }

    #[test]
    fn test_toml_overrides() {
        let config = ApiConfig::from_toml(
            r#"
            base_url = "https://api.example.com"
            graphql_path = "/gql"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            ApiConfig::new("https://api.example.com").with_graphql_path("/gql")
        );
    }

    #[test]
    fn test_from_toml_or_falls_back() {
        let fallback = ApiConfig::new("http://localhost:8000");

        assert_eq!(ApiConfig::from_toml_or(None, fallback.clone()), fallback);
        assert_eq!(
            ApiConfig::from_toml_or(Some("base_url = 42"), fallback.clone()),
            fallback
        );

        let config = ApiConfig::from_toml_or(
            Some(r#"base_url = "https://api.example.com""#),
            fallback,
        );
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.graphql_path, "/graphql");
    }

    #[test]
    fn test_resolved_against_only_fills_empty_base() {
        let config = ApiConfig::default().resolved_against("http://localhost:5173");
        assert_eq!(config.graphql_url(), "http://localhost:5173/graphql");

        let config = ApiConfig::new("https://api.example.com").resolved_against("http://localhost:5173");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_url_joining_tolerates_slashes() {
        let config = ApiConfig::new("https://api.example.com/").with_graphql_path("graphql");
        assert_eq!(config.graphql_url(), "https://api.example.com/graphql");
        assert_eq!(config.rest_url("auth/me"), "https://api.example.com/auth/me");
        assert_eq!(config.rest_url("/auth/me"), "https://api.example.com/auth/me");
    }
}
