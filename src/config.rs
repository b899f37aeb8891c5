//! Configuration for the Talent Protocol client.

use serde::Deserialize;

/// Environment variable overriding the base API URL.
pub const ENV_BASE_URL: &str = "TALENT_API_URL";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "TALENT_API_KEY";

/// Talent Protocol client configuration.
///
/// Passed explicitly to [`TalentClient::new`](crate::TalentClient::new); the
/// client never reads the process environment itself. Fields are not
/// validated: an empty API key is sent as-is, rejected upstream, and the
/// lookup collapses to an absent result.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base API URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent in the `X-API-KEY` header.
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.talentprotocol.com/api/v2".to_string()
}

fn default_timeout() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_ms: default_timeout(),
        }
    }
}

impl Config {
    /// Build a configuration from `TALENT_API_URL` and `TALENT_API_KEY`,
    /// keeping the defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(ENV_BASE_URL).unwrap_or_else(|_| default_base_url()),
            api_key: std::env::var(ENV_API_KEY).unwrap_or_default(),
            timeout_ms: default_timeout(),
        }
    }
}
