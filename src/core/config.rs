use std::env;
use std::time::Duration;

use url::Url;

use crate::errors::PreferenceError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How requests authenticate against the REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    None,
    Basic { user: String, password: String },
    /// Access tokens are sent as basic auth with the literal password `token`.
    Token(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: Url,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `PREFSYNC_API_URL` is missing or any value
    /// fails to parse.
    pub fn from_env() -> Result<Self, PreferenceError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PreferenceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("PREFSYNC_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| PreferenceError::ConfigError("PREFSYNC_API_URL: not set".into()))?;
        let api_url = Url::parse(raw_url.trim())
            .map_err(|e| PreferenceError::ConfigError(format!("PREFSYNC_API_URL: {e}")))?;

        let credentials = match (
            lookup("PREFSYNC_API_TOKEN"),
            lookup("PREFSYNC_API_USER"),
            lookup("PREFSYNC_API_PASSWORD"),
        ) {
            (Some(token), _, _) if !token.is_empty() => Credentials::Token(token),
            (_, Some(user), password) if !user.is_empty() => Credentials::Basic {
                user,
                password: password.unwrap_or_default(),
            },
            _ => Credentials::None,
        };

        let timeout = match lookup("PREFSYNC_TIMEOUT_SECS") {
            Some(secs) => secs
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| PreferenceError::ConfigError(format!("PREFSYNC_TIMEOUT_SECS: {e}")))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            credentials,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_api_url_is_reported() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("PREFSYNC_API_URL"));
    }

    #[test]
    fn test_defaults() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("PREFSYNC_API_URL", "http://localhost:9000/api")]))
                .unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:9000/api");
        assert_eq!(config.credentials, Credentials::None);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_token_wins_over_basic_auth() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PREFSYNC_API_URL", "http://localhost:9000/api"),
            ("PREFSYNC_API_USER", "admin"),
            ("PREFSYNC_API_PASSWORD", "secret"),
            ("PREFSYNC_API_TOKEN", "abc123"),
        ]))
        .unwrap();
        assert_eq!(config.credentials, Credentials::Token("abc123".into()));
    }

    #[test]
    fn test_basic_auth_and_timeout() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PREFSYNC_API_URL", "https://logs.example.com/api/"),
            ("PREFSYNC_API_USER", "admin"),
            ("PREFSYNC_API_PASSWORD", "secret"),
            ("PREFSYNC_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(
            config.credentials,
            Credentials::Basic {
                user: "admin".into(),
                password: "secret".into()
            }
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(AppConfig::from_lookup(lookup_from(&[("PREFSYNC_API_URL", "not a url")])).is_err());
        assert!(
            AppConfig::from_lookup(lookup_from(&[
                ("PREFSYNC_API_URL", "http://localhost/api"),
                ("PREFSYNC_TIMEOUT_SECS", "soon"),
            ]))
            .is_err()
        );
    }
}
