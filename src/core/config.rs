//! Connection settings for the CFBD API, read from the environment.

use crate::{CfbdError, Result, API_KEY_ENV_VAR, HOST_ENV_VAR};

/// Default API host.
pub const DEFAULT_HOST: &str = "https://apinext.collegefootballdata.com";

/// Host and credentials used to build a [`crate::cfbd::http::CfbdClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub api_key: String,
}

impl Config {
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
        }
    }

    /// Read `CFBD_API_KEY` and the optional `CFBD_HOST` override.
    ///
    /// `.env` loading happens in `main` before this is called.
    pub fn from_env() -> Result<Self> {
        let api_key = resolve_api_key(None)?;
        let host = std::env::var(HOST_ENV_VAR)
            .ok()
            .map(|h| h.trim().trim_end_matches('/').to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        Ok(Self { host, api_key })
    }
}

/// Resolve the API key from an explicit value or the environment.
pub fn resolve_api_key(api_key: Option<String>) -> Result<String> {
    api_key
        .or_else(|| std::env::var(API_KEY_ENV_VAR).ok())
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| CfbdError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_explicit_wins() {
        let key = resolve_api_key(Some(" token ".to_string())).unwrap();
        assert_eq!(key, "token");
    }

    #[test]
    fn test_resolve_api_key_blank_is_missing() {
        let err = resolve_api_key(Some("   ".to_string())).unwrap_err();
        match err {
            CfbdError::MissingApiKey { env_var } => assert_eq!(env_var, API_KEY_ENV_VAR),
            other => panic!("Expected MissingApiKey, got {other:?}"),
        }
    }

    #[test]
    fn test_config_new() {
        let config = Config::new("http://localhost:8080", "k");
        assert_eq!(config.host, "http://localhost:8080");
        assert_eq!(config.api_key, "k");
    }
}
