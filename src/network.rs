//! Network URL constants and environment-driven base URL selection.
//!
//! The base URL is resolved once at startup and never changes afterwards.

use crate::error::SdkError;
use std::time::Duration;

/// Backend origin used during local development.
pub const DEFAULT_DEV_API_URL: &str = "http://localhost:8001/api";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_ENVIRONMENT: &str = "LEARNING_FINNISH_ENV";
pub const ENV_ORIGIN: &str = "LEARNING_FINNISH_ORIGIN";
pub const ENV_BASE_PATH: &str = "LEARNING_FINNISH_BASE_PATH";
pub const ENV_API_URL: &str = "LEARNING_FINNISH_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "LEARNING_FINNISH_TIMEOUT_SECS";

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Talk to the backend origin directly.
    #[default]
    Development,
    /// Talk to the `api` prefix under the path the app is served from.
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub environment: Environment,
    /// Scheme + host the production app is served from, e.g. `https://example.com`.
    pub origin: String,
    /// Path the app is mounted under, e.g. `/` or `/finnish/`.
    pub base_path: String,
    /// Explicit base URL; wins over environment selection.
    pub api_url: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            origin: String::new(),
            base_path: "/".to_string(),
            api_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn development() -> Self {
        Self::default()
    }

    pub fn production(origin: &str, base_path: &str) -> Self {
        Self {
            environment: Environment::Production,
            origin: origin.to_string(),
            base_path: base_path.to_string(),
            ..Self::default()
        }
    }

    /// Read the configuration from `LEARNING_FINNISH_*` environment variables.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let mut config = Self::default();

        if let Some(env) = lookup(ENV_ENVIRONMENT) {
            config.environment = Environment::parse(&env).ok_or_else(|| {
                SdkError::Config(format!("{ENV_ENVIRONMENT}: unknown environment '{env}'"))
            })?;
        }
        if let Some(origin) = lookup(ENV_ORIGIN) {
            config.origin = origin;
        }
        if let Some(base_path) = lookup(ENV_BASE_PATH) {
            config.base_path = base_path;
        }
        config.api_url = lookup(ENV_API_URL).filter(|s| !s.trim().is_empty());
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                SdkError::Config(format!("{ENV_TIMEOUT_SECS}: expected seconds, got '{secs}'"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// The base URL every request path is appended to.
    pub fn api_base_url(&self) -> Result<String, SdkError> {
        if let Some(url) = &self.api_url {
            return Ok(url.trim_end_matches('/').to_string());
        }
        match self.environment {
            Environment::Development => Ok(DEFAULT_DEV_API_URL.to_string()),
            Environment::Production => {
                if self.origin.is_empty() {
                    return Err(SdkError::Config(
                        "production environment requires an origin".to_string(),
                    ));
                }
                let base_path = if self.base_path.is_empty() {
                    "/"
                } else {
                    self.base_path.as_str()
                };
                let base_path = if base_path.ends_with('/') {
                    base_path.to_string()
                } else {
                    format!("{base_path}/")
                };
                let base_path = if base_path.starts_with('/') {
                    base_path
                } else {
                    format!("/{base_path}")
                };
                Ok(format!(
                    "{}{}api",
                    self.origin.trim_end_matches('/'),
                    base_path
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_development_uses_backend_origin() {
        let config = ClientConfig::development();
        assert_eq!(config.api_base_url().unwrap(), DEFAULT_DEV_API_URL);
    }

    #[test]
    fn test_production_uses_relative_api_prefix() {
        let config = ClientConfig::production("https://example.com", "/");
        assert_eq!(config.api_base_url().unwrap(), "https://example.com/api");

        let config = ClientConfig::production("https://example.com/", "/finnish");
        assert_eq!(config.api_base_url().unwrap(), "https://example.com/finnish/api");
    }

    #[test]
    fn test_production_without_origin_fails() {
        let config = ClientConfig::production("", "/");
        assert!(matches!(config.api_base_url(), Err(SdkError::Config(_))));
    }

    #[test]
    fn test_from_lookup_reads_all_vars() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_ENVIRONMENT, "production"),
            (ENV_ORIGIN, "https://learn.example"),
            (ENV_BASE_PATH, "/finnish/"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.api_base_url().unwrap(),
            "https://learn.example/finnish/api"
        );
    }

    #[test]
    fn test_explicit_api_url_wins() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_API_URL, "http://10.0.0.2:9000/api/")]))
            .unwrap();
        assert_eq!(config.api_base_url().unwrap(), "http://10.0.0.2:9000/api");
    }

    #[test]
    fn test_unknown_environment_is_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_ENVIRONMENT, "staging")])).unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }
}
