//! Configuration types for hw-watch

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Default status API endpoint
fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

/// Default Telegram Bot API base URL
fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}

/// Default poll interval (600 seconds)
fn default_poll_interval() -> Duration {
    Duration::from_secs(600)
}

/// Main configuration for the homework status watcher
///
/// All fields have serde defaults so a partial config deserializes cleanly;
/// the three tokens default to empty and must be supplied through the
/// environment (see [`Config::from_env`]) or directly by an embedder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// OAuth token for the homework status API (`PRACTICUM_TOKEN`)
    #[serde(default)]
    pub practicum_token: String,

    /// Telegram bot token (`TELEGRAM_TOKEN`)
    #[serde(default)]
    pub telegram_token: String,

    /// Destination chat for notifications (`TELEGRAM_CHAT_ID`)
    #[serde(default)]
    pub telegram_chat_id: String,

    /// Homework status API endpoint (default: the Practicum production URL)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Telegram Bot API base URL (default: `https://api.telegram.org`)
    #[serde(default = "default_telegram_api_base")]
    pub telegram_api_base: String,

    /// Sleep between poll iterations (default: 600 seconds)
    #[serde(default = "default_poll_interval")]
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            practicum_token: String::new(),
            telegram_token: String::new(),
            telegram_chat_id: String::new(),
            endpoint: default_endpoint(),
            telegram_api_base: default_telegram_api_base(),
            poll_interval: default_poll_interval(),
        }
    }
}

impl Config {
    /// Builds a configuration from the process environment.
    ///
    /// Reads `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID`, plus
    /// the optional overrides `PRACTICUM_ENDPOINT` and `POLL_INTERVAL_SECS`.
    /// Missing variables leave the corresponding default in place; validation
    /// is a separate step (see [`Config::validate`]).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("PRACTICUM_TOKEN") {
            config.practicum_token = value;
        }
        if let Ok(value) = std::env::var("TELEGRAM_TOKEN") {
            config.telegram_token = value;
        }
        if let Ok(value) = std::env::var("TELEGRAM_CHAT_ID") {
            config.telegram_chat_id = value;
        }
        if let Ok(value) = std::env::var("PRACTICUM_ENDPOINT") {
            config.endpoint = value;
        }
        if let Ok(value) = std::env::var("POLL_INTERVAL_SECS") {
            match value.parse::<u64>() {
                Ok(secs) => config.poll_interval = Duration::from_secs(secs),
                Err(e) => {
                    warn!(value = %value, error = %e, "invalid POLL_INTERVAL_SECS, keeping default");
                }
            }
        }

        config
    }

    /// Returns `true` only when all three required tokens are non-empty.
    pub fn has_required_tokens(&self) -> bool {
        !self.practicum_token.is_empty()
            && !self.telegram_token.is_empty()
            && !self.telegram_chat_id.is_empty()
    }

    /// Validates the configuration for startup.
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first missing token, or an
    /// endpoint that does not parse as a URL. Called once before the poll
    /// loop starts; a failure here is fatal.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("practicum_token", "PRACTICUM_TOKEN", &self.practicum_token),
            ("telegram_token", "TELEGRAM_TOKEN", &self.telegram_token),
            ("telegram_chat_id", "TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ];
        for (key, env_name, value) in required {
            if value.is_empty() {
                return Err(Error::Config {
                    message: format!("{env_name} is not set"),
                    key: Some(key.to_string()),
                });
            }
        }

        for (key, value) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_base", &self.telegram_api_base),
        ] {
            if let Err(e) = Url::parse(value) {
                return Err(Error::Config {
                    message: format!("{key} is not a valid URL: {e}"),
                    key: Some(key.to_string()),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_config() -> Config {
        Config {
            practicum_token: "practicum-token".to_string(),
            telegram_token: "telegram-token".to_string(),
            telegram_chat_id: "123456".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(
            config.endpoint,
            "https://practicum.yandex.ru/api/user_api/homework_statuses/"
        );
        assert_eq!(config.telegram_api_base, "https://api.telegram.org");
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert!(config.practicum_token.is_empty());
    }

    #[test]
    fn has_required_tokens_true_when_all_present() {
        assert!(complete_config().has_required_tokens());
    }

    #[test]
    fn has_required_tokens_false_when_any_missing() {
        let mut config = complete_config();
        config.practicum_token = String::new();
        assert!(!config.has_required_tokens());

        let mut config = complete_config();
        config.telegram_token = String::new();
        assert!(!config.has_required_tokens());

        let mut config = complete_config();
        config.telegram_chat_id = String::new();
        assert!(!config.has_required_tokens());
    }

    #[test]
    fn validate_names_the_missing_key() {
        let mut config = complete_config();
        config.telegram_token = String::new();

        let err = config.validate().unwrap_err();
        match err {
            Error::Config { message, key } => {
                assert_eq!(key.as_deref(), Some("telegram_token"));
                assert!(message.contains("TELEGRAM_TOKEN"), "message: {message}");
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_malformed_endpoint() {
        let mut config = complete_config();
        config.endpoint = "not a url".to_string();

        let err = config.validate().unwrap_err();
        match err {
            Error::Config { key, .. } => assert_eq!(key.as_deref(), Some("endpoint")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(complete_config().validate().is_ok());
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"practicum_token": "t"}"#).unwrap();
        assert_eq!(config.practicum_token, "t");
        assert_eq!(config.poll_interval, Duration::from_secs(600));
    }
}
