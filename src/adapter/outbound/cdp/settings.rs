//! Coinbase Developer Platform connection settings.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Environment variable holding the API key identifier.
pub const API_KEY_ID_VAR: &str = "CDP_API_KEY_ID";

/// Environment variable holding the API key secret.
pub const API_KEY_SECRET_VAR: &str = "CDP_API_KEY_SECRET";

/// Environment variable holding the wallet secret.
pub const WALLET_SECRET_VAR: &str = "CDP_WALLET_SECRET";

/// HTTP settings for the CDP REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL, including the `/platform` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.cdp.coinbase.com/platform".into()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Polling settings for user operation confirmation.
#[derive(Debug, Clone, Deserialize)]
pub struct WaitConfig {
    /// Give up after this many seconds.
    #[serde(default = "default_wait_timeout_secs")]
    pub timeout_secs: u64,
    /// Delay between status checks in milliseconds.
    #[serde(default = "default_wait_interval_ms")]
    pub interval_ms: u64,
}

const fn default_wait_timeout_secs() -> u64 {
    20
}

const fn default_wait_interval_ms() -> u64 {
    200
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_wait_timeout_secs(),
            interval_ms: default_wait_interval_ms(),
        }
    }
}

/// API credentials. Loaded from the environment, never from the config file.
#[derive(Clone, Default)]
pub struct CdpCredentials {
    pub api_key_id: Option<String>,
    pub api_key_secret: Option<String>,
    /// Only needed for requests that create or use account keys.
    pub wallet_secret: Option<String>,
}

impl CdpCredentials {
    /// Read credentials from `CDP_API_KEY_ID`, `CDP_API_KEY_SECRET` and
    /// `CDP_WALLET_SECRET`. Empty values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            api_key_id: read(API_KEY_ID_VAR),
            api_key_secret: read(API_KEY_SECRET_VAR),
            wallet_secret: read(WALLET_SECRET_VAR),
        }
    }

    /// Return the API key id and secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first missing variable.
    pub fn api_key(&self) -> Result<(&str, &str)> {
        let id = self.api_key_id.as_deref().ok_or(ConfigError::MissingField {
            field: API_KEY_ID_VAR,
        })?;
        let secret = self
            .api_key_secret
            .as_deref()
            .ok_or(ConfigError::MissingField {
                field: API_KEY_SECRET_VAR,
            })?;
        Ok((id, secret))
    }
}

impl std::fmt::Debug for CdpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("CdpCredentials")
            .field("api_key_id", &self.api_key_id)
            .field("api_key_secret", &mask(&self.api_key_secret))
            .field("wallet_secret", &mask(&self.wallet_secret))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults_match_the_public_endpoint() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url, "https://api.cdp.coinbase.com/platform");
        assert_eq!(api.timeout_secs, 30);

        let wait = WaitConfig::default();
        assert_eq!(wait.timeout_secs, 20);
        assert_eq!(wait.interval_ms, 200);
    }

    #[test]
    fn api_key_reports_first_missing_variable() {
        let none = CdpCredentials::default();
        let err = none.api_key().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField {
                field: API_KEY_ID_VAR
            })
        ));

        let id_only = CdpCredentials {
            api_key_id: Some("key".into()),
            ..Default::default()
        };
        let err = id_only.api_key().unwrap_err();
        assert!(err.to_string().contains(API_KEY_SECRET_VAR));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let creds = CdpCredentials {
            api_key_id: Some("key-id".into()),
            api_key_secret: Some("super-secret".into()),
            wallet_secret: Some("wallet-secret".into()),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("key-id"));
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("wallet-secret"));
    }
}
