//! Talent Protocol reputation fetcher.

use crate::config::Config;
use crate::reputation::{PassportResponse, ReputationRecord};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Advisory freshness hint attached to every lookup request: intermediary
/// caches may treat the response as fresh for up to this many seconds. The
/// client itself caches nothing.
const FRESHNESS_MAX_AGE_SECS: u64 = 3600;

/// Failure while fetching a passport. Never surfaces to callers:
/// [`TalentClient::reputation`] logs it and yields `None` instead.
#[derive(Debug)]
enum LookupError {
    /// HTTP request failed.
    Http(reqwest::Error),
    /// Request timed out.
    Timeout,
    /// Non-success response status.
    Status(reqwest::StatusCode),
    /// Response body was not a valid passport document.
    Decode(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Http(e) => write!(f, "HTTP error: {}", e),
            LookupError::Timeout => write!(f, "Request timed out"),
            LookupError::Status(status) => write!(f, "HTTP {}", status),
            LookupError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LookupError::Timeout
        } else {
            LookupError::Http(e)
        }
    }
}

/// Talent Protocol API client.
///
/// Holds the configuration and a pooled HTTP client; cheap to clone and safe
/// to share, with no mutable state between lookups.
#[derive(Debug, Clone)]
pub struct TalentClient {
    config: Config,
    client: Client,
}

impl TalentClient {
    /// Create a new client from an explicit configuration.
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Look up the reputation record for a wallet address.
    ///
    /// An empty address yields `None` without a network call. Every failure
    /// (non-success status, transport error, or a malformed body) also
    /// collapses to `None`: "not found" and "unreachable" are
    /// indistinguishable to callers, and diagnostic detail goes to the log
    /// sink only.
    pub async fn reputation(&self, address: &str) -> Option<ReputationRecord> {
        if address.is_empty() {
            debug!("No wallet address provided, skipping lookup");
            return None;
        }

        match self.fetch_passport(address).await {
            Ok(response) => {
                let record = ReputationRecord::from_response(&response);
                debug!(
                    address = %address,
                    score = record.score,
                    tier = %record.tier,
                    "Passport lookup complete"
                );
                Some(record)
            }
            Err(e) => {
                warn!(address = %address, error = %e, "Talent Protocol lookup failed");
                None
            }
        }
    }

    /// Issue the single passport request and decode the body.
    async fn fetch_passport(&self, address: &str) -> Result<PassportResponse, LookupError> {
        let url = format!("{}/passports/{}", self.config.base_url, address);

        debug!(address = %address, "Querying Talent Protocol");

        let response = self
            .client
            .get(&url)
            .header("X-API-KEY", &self.config.api_key)
            .header("Content-Type", "application/json")
            .header(
                "Cache-Control",
                format!("max-age={}", FRESHNESS_MAX_AGE_SECS),
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        response.json().await.map_err(|e| {
            LookupError::Decode(format!("Failed to parse passport response: {}", e))
        })
    }
}
