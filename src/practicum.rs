//! Client and response validation for the homework status API.
//!
//! The API returns a JSON envelope of the form:
//!
//! ```json
//! { "homeworks": [ { "homework_name": "...", "status": "..." } ], "current_date": 1000 }
//! ```
//!
//! [`PracticumClient`] performs the authenticated fetch and hands back the
//! parsed body as a [`serde_json::Value`]; [`check_response`] then verifies
//! the envelope shape one check at a time so a malformed response reports
//! exactly which structural constraint it broke, instead of collapsing into a
//! single deserialization error.

use crate::config::Config;
use crate::error::{Error, Result, ShapeError};
use serde_json::Value;
use tracing::{debug, error};

/// HTTP client for the homework status API
///
/// Holds one long-lived `reqwest::Client`; a single instance is reused across
/// all poll iterations.
pub struct PracticumClient {
    /// HTTP client with a fixed request timeout
    http_client: reqwest::Client,

    /// Status API endpoint URL
    endpoint: String,

    /// OAuth token sent on every request
    token: String,
}

impl PracticumClient {
    /// Creates a new status API client from the configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        // 30 second timeout; the API normally answers well under that
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("hw-watch status poller")
            .build()?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }

    /// Fetches homework statuses changed since `from_date` (unix seconds).
    ///
    /// Issues `GET {endpoint}?from_date={from_date}` with an
    /// `Authorization: OAuth <token>` header and returns the parsed JSON
    /// body.
    ///
    /// # Errors
    /// - [`Error::Network`] if the request fails before a response arrives
    /// - [`Error::Api`] if the API answers with a non-success status
    /// - [`Error::Serialization`] if the body is not valid JSON
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        debug!(endpoint = %self.endpoint, from_date, "fetching homework statuses");

        let response = self
            .http_client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        // Check HTTP status before trying to parse the response body
        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "status API request failed");
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(value)
    }
}

/// Validates the API response envelope and extracts the first homework record.
///
/// Checks, in order:
/// 1. the response is a JSON object
/// 2. it contains the key `homeworks`
/// 3. `homeworks` is an array
/// 4. the array is non-empty
///
/// The emptiness check applies to the homework list itself, not the
/// surrounding envelope.
///
/// # Errors
/// Returns [`Error::Shape`] describing the first check that failed.
pub fn check_response(response: &Value) -> Result<&Value> {
    let envelope = response
        .as_object()
        .ok_or_else(|| ShapeError::wrong_type("object", response))?;

    let homeworks = envelope
        .get("homeworks")
        .ok_or(ShapeError::MissingKey("homeworks"))?;

    let list = homeworks
        .as_array()
        .ok_or_else(|| ShapeError::wrong_type("array", homeworks))?;

    list.first().ok_or_else(|| ShapeError::EmptyList.into())
}
