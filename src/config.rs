//! Feed configuration, read from the environment (and `.env`).
//!
//! | Variable                  | Default                                  |
//! |---------------------------|------------------------------------------|
//! | `SOCIALFEED_HANDLE`       | `instagram`                              |
//! | `SOCIALFEED_API_KEY`      | unset: the paid API strategy is skipped  |
//! | `SOCIALFEED_RELAY_URL`    | [`DEFAULT_RELAY_URL`]                    |
//! | `SOCIALFEED_PROFILE_URL`  | [`DEFAULT_PROFILE_URL`]                  |
//! | `SOCIALFEED_API_URL`      | [`DEFAULT_API_URL`]                      |
//! | `SOCIALFEED_API_HOST`     | [`DEFAULT_API_HOST`]                     |
//! | `SOCIALFEED_TIMEOUT_SECS` | 10                                       |
//! | `SOCIALFEED_LOCALE`       | `en`                                     |

use std::env;
use std::time::Duration;

use crate::locale::Locale;
use crate::orchestrator::DEFAULT_ATTEMPT_TIMEOUT;

pub use crate::source::{DEFAULT_API_HOST, DEFAULT_API_URL, DEFAULT_PROFILE_URL, DEFAULT_RELAY_URL};

pub const DEFAULT_HANDLE: &str = "instagram";

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub handle: String,
    /// Paid API credential.  `None` makes that strategy report itself
    /// misconfigured and the chain moves on.
    pub api_key: Option<String>,
    pub relay_url: String,
    pub profile_url: String,
    pub api_url: String,
    pub api_host: String,
    /// Upper bound for each individual source attempt.
    pub attempt_timeout: Duration,
    pub locale: Locale,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            handle: DEFAULT_HANDLE.to_string(),
            api_key: None,
            relay_url: DEFAULT_RELAY_URL.to_string(),
            profile_url: DEFAULT_PROFILE_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            locale: Locale::default(),
        }
    }
}

impl FeedConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup.  Blank values count as unset;
    /// unparsable numbers and locales keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let attempt_timeout = match get("SOCIALFEED_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "Invalid SOCIALFEED_TIMEOUT_SECS, using default");
                    defaults.attempt_timeout
                }
            },
            None => defaults.attempt_timeout,
        };

        let locale = match get("SOCIALFEED_LOCALE") {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "Invalid SOCIALFEED_LOCALE, using default");
                defaults.locale
            }),
            None => defaults.locale,
        };

        Self {
            handle: get("SOCIALFEED_HANDLE").unwrap_or(defaults.handle),
            api_key: get("SOCIALFEED_API_KEY"),
            relay_url: get("SOCIALFEED_RELAY_URL").unwrap_or(defaults.relay_url),
            profile_url: get("SOCIALFEED_PROFILE_URL").unwrap_or(defaults.profile_url),
            api_url: get("SOCIALFEED_API_URL").unwrap_or(defaults.api_url),
            api_host: get("SOCIALFEED_API_HOST").unwrap_or(defaults.api_host),
            attempt_timeout,
            locale,
        }
    }

    pub fn paid_api_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = FeedConfig::from_lookup(lookup(&[]));

        assert_eq!(config.handle, DEFAULT_HANDLE);
        assert!(config.api_key.is_none());
        assert!(!config.paid_api_enabled());
        assert_eq!(config.relay_url, DEFAULT_RELAY_URL);
        assert_eq!(config.attempt_timeout, DEFAULT_ATTEMPT_TIMEOUT);
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn reads_every_variable() {
        let config = FeedConfig::from_lookup(lookup(&[
            ("SOCIALFEED_HANDLE", "acme.studio"),
            ("SOCIALFEED_API_KEY", "k-123"),
            ("SOCIALFEED_RELAY_URL", "https://relay.example/?u="),
            ("SOCIALFEED_PROFILE_URL", "https://ig.example/{handle}"),
            ("SOCIALFEED_API_URL", "https://api.example/{handle}"),
            ("SOCIALFEED_API_HOST", "api.example"),
            ("SOCIALFEED_TIMEOUT_SECS", "3"),
            ("SOCIALFEED_LOCALE", "tr"),
        ]));

        assert_eq!(config.handle, "acme.studio");
        assert_eq!(config.api_key.as_deref(), Some("k-123"));
        assert!(config.paid_api_enabled());
        assert_eq!(config.relay_url, "https://relay.example/?u=");
        assert_eq!(config.profile_url, "https://ig.example/{handle}");
        assert_eq!(config.api_url, "https://api.example/{handle}");
        assert_eq!(config.api_host, "api.example");
        assert_eq!(config.attempt_timeout, Duration::from_secs(3));
        assert_eq!(config.locale, Locale::Turkish);
    }

    #[test]
    fn blank_key_is_treated_as_missing() {
        let config = FeedConfig::from_lookup(lookup(&[("SOCIALFEED_API_KEY", "  ")]));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = FeedConfig::from_lookup(lookup(&[
            ("SOCIALFEED_TIMEOUT_SECS", "soon"),
            ("SOCIALFEED_LOCALE", "klingon"),
        ]));
        assert_eq!(config.attempt_timeout, DEFAULT_ATTEMPT_TIMEOUT);
        assert_eq!(config.locale, Locale::English);

        let zero = FeedConfig::from_lookup(lookup(&[("SOCIALFEED_TIMEOUT_SECS", "0")]));
        assert_eq!(zero.attempt_timeout, DEFAULT_ATTEMPT_TIMEOUT);
    }
}
