//! Dashboard Configuration
//!
//! Resolves the API base URL and log level from the page, the build
//! environment and built-in defaults.

use std::str::FromStr;

use log::LevelFilter;
use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// `<meta name="...">` consulted at runtime for the API base URL
pub const API_BASE_META: &str = "dashboard-api-base";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: Url,
    pub log_level: LevelFilter,
}

impl Config {
    /// Load from the served page and the build environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(
            page_api_base().as_deref(),
            option_env!("DASHBOARD_API_BASE_URL"),
            option_env!("DASHBOARD_LOG_LEVEL"),
        )
    }

    /// Page value wins over the build-time value, which wins over the default
    pub fn from_sources(
        page_url: Option<&str>,
        build_url: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let raw = [page_url, build_url]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);

        let api_base_url = parse_base_url(raw)?;

        let log_level = match log_level.map(str::trim).filter(|s| !s.is_empty()) {
            Some(level) => LevelFilter::from_str(level)
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?,
            None => LevelFilter::Info,
        };

        Ok(Self { api_base_url, log_level })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme `{}`", other))),
    }
}

#[cfg(target_arch = "wasm32")]
fn page_api_base() -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    web_sys::window()?
        .document()?
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(not(target_arch = "wasm32"))]
fn page_api_base() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_sources(None, None, None).unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_page_overrides_build_value() {
        let config = Config::from_sources(
            Some("https://api.example.com/v1"),
            Some("http://build.example.com"),
            None,
        )
        .unwrap();
        assert_eq!(config.api_base_url.as_str(), "https://api.example.com/v1");
    }

    #[test]
    fn test_blank_page_value_falls_through() {
        let config = Config::from_sources(Some("  "), Some("http://build.example.com"), None).unwrap();
        assert_eq!(config.api_base_url.host_str(), Some("build.example.com"));
    }

    #[test]
    fn test_rejects_relative_and_non_http_urls() {
        assert!(matches!(
            Config::from_sources(Some("/api"), None, None),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            Config::from_sources(Some("ftp://files.example.com"), None, None),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_log_level() {
        let config = Config::from_sources(None, None, Some("debug")).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);

        assert_eq!(
            Config::from_sources(None, None, Some("chatty")),
            Err(ConfigError::InvalidLogLevel("chatty".to_string()))
        );
    }
}
