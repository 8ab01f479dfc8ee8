//! Server configuration
//!
//! Built once at startup from environment variables and passed to the
//! constructors that need it.

use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::adapters::anthropic::DEFAULT_API_URL;

/// Credential values that select mock mode even when set
const PLACEHOLDER_API_KEYS: [&str; 2] = ["mock", "your-claude-api-key"];

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    #[error("wildcard CORS origin \"*\" is not allowed with credentials; list origins explicitly")]
    WildcardOrigin,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Deployment environment name (`ENVIRONMENT`)
    pub environment: Option<String>,
    /// Listen port
    pub port: u16,
    /// Upstream credential as configured, placeholders included
    pub api_key: Option<String>,
    /// Upstream messages endpoint
    pub api_url: String,
    /// Origins allowed by CORS
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort {
                    reason: e.to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let cors_origins: Vec<String> = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };
        if cors_origins.iter().any(|o| o == "*") {
            return Err(ConfigError::WildcardOrigin);
        }

        Ok(Self {
            environment: lookup("ENVIRONMENT").filter(|e| !e.is_empty()),
            port,
            api_key: lookup("CLAUDE_API_KEY"),
            api_url: lookup("ANTHROPIC_API_URL")
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            cors_origins,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.as_deref() == Some("production")
    }

    /// Default log level for the environment
    pub fn log_level(&self) -> &'static str {
        if self.is_production() {
            "info"
        } else {
            "debug"
        }
    }

    /// Credential usable for live calls, or `None` when mock mode applies
    pub fn live_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty() && !PLACEHOLDER_API_KEYS.contains(key))
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: None,
            port: DEFAULT_PORT,
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.log_level(), "debug");
        assert!(config.live_api_key().is_none());
    }

    #[test]
    fn test_production_logs_at_info() {
        let config = load(&[("ENVIRONMENT", "production")]).unwrap();
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_placeholder_keys_select_mock() {
        for key in ["", "mock", "your-claude-api-key"] {
            let config = load(&[("CLAUDE_API_KEY", key)]).unwrap();
            assert!(config.live_api_key().is_none(), "key {key:?} should be mock");
        }

        let config = load(&[("CLAUDE_API_KEY", "sk-ant-real")]).unwrap();
        assert_eq!(config.live_api_key(), Some("sk-ant-real"));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn test_wildcard_cors_origin_rejected() {
        for raw in ["*", "http://localhost:3000, *"] {
            let err = load(&[("CORS_ALLOWED_ORIGINS", raw)]).unwrap_err();
            assert!(matches!(err, ConfigError::WildcardOrigin), "{raw:?}");
        }
    }

    #[test]
    fn test_cors_origins_from_list() {
        let config = load(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://imgonna.app, https://www.imgonna.app,",
        )])
        .unwrap();
        assert_eq!(
            config.cors_origins,
            vec!["https://imgonna.app", "https://www.imgonna.app"]
        );
    }
}
