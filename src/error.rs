//! Error types for hw-watch
//!
//! This module provides the error model for the crate:
//! - One top-level [`Error`] covering configuration, transport, and delivery
//!   failures
//! - A nested [`ShapeError`] for malformed API responses, so the validator can
//!   report exactly which structural check failed
//! - A crate-wide [`Result`] alias

use serde_json::Value;
use thiserror::Error;

/// Result type alias for hw-watch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hw-watch
///
/// Every failure mode of a poll iteration maps to one variant here. The poll
/// loop treats them all identically (log and retry next cycle); only
/// [`Error::Config`] is raised before the loop starts and aborts the process.
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration missing or invalid; fatal at startup
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "practicum_token")
        key: Option<String>,
    },

    /// Network-level failure before or during an HTTP exchange
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Status API answered with a non-success HTTP status
    #[error("status API returned HTTP {status}")]
    Api {
        /// The HTTP status code the API returned
        status: u16,
    },

    /// Response body could not be parsed as JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API response parsed as JSON but violates the expected shape
    #[error("malformed API response: {0}")]
    Shape(#[from] ShapeError),

    /// Homework status code outside the known set
    #[error("unknown homework status: {0:?}")]
    UnknownStatus(String),

    /// Telegram Bot API rejected the outbound message
    #[error("Telegram send failed with HTTP {status}: {body}")]
    Telegram {
        /// The HTTP status code the Bot API returned
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },
}

/// Structural errors in an otherwise well-formed JSON response
///
/// Produced by the response validator and the status formatter when the
/// payload does not match the documented envelope.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// A value had the wrong JSON type
    #[error("wrong response type: expected {expected}, found {found}")]
    WrongType {
        /// The JSON type the envelope requires at this position
        expected: &'static str,
        /// The JSON type actually found
        found: &'static str,
    },

    /// A required key is absent
    #[error("key {0:?} missing from response")]
    MissingKey(&'static str),

    /// The homework list is present but empty
    #[error("empty homework list")]
    EmptyList,
}

impl ShapeError {
    /// Builds a [`ShapeError::WrongType`] naming the JSON type of `found`.
    pub fn wrong_type(expected: &'static str, found: &Value) -> Self {
        ShapeError::WrongType {
            expected,
            found: json_type_name(found),
        }
    }
}

/// Human-readable JSON type name for error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
