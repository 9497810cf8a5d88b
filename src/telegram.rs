//! Telegram Bot API notifier.
//!
//! One operation: deliver a text message to the configured chat via the
//! `sendMessage` method. Delivery is awaited to completion before the poll
//! loop proceeds; there is no retry and no delivery confirmation beyond the
//! HTTP status.

use crate::config::Config;
use crate::error::{Error, Result};
use serde::Serialize;
use tracing::{info, warn};

/// Body of a Bot API `sendMessage` call
#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Notifier sending messages to a fixed Telegram chat
pub struct TelegramBot {
    /// HTTP client with a fixed request timeout
    http_client: reqwest::Client,

    /// Bot token, part of the request URL
    token: String,

    /// Destination chat identifier
    chat_id: String,

    /// Bot API base URL, without trailing slash
    api_base: String,
}

impl TelegramBot {
    /// Creates a notifier from the configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("hw-watch notifier")
            .build()?;

        Ok(Self {
            http_client,
            token: config.telegram_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
            api_base: config.telegram_api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Sends `text` to the configured chat.
    ///
    /// # Errors
    /// - [`Error::Network`] on transport failure
    /// - [`Error::Telegram`] when the Bot API answers with a non-success
    ///   status; the response body is carried for diagnostics
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);

        let response = self
            .http_client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The URL embeds the bot token, so log only the chat id
            warn!(
                chat_id = %self.chat_id,
                status = status.as_u16(),
                body = %body,
                "Telegram send failed"
            );
            return Err(Error::Telegram {
                status: status.as_u16(),
                body,
            });
        }

        info!(chat_id = %self.chat_id, "notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_bot(api_base: String) -> TelegramBot {
        let config = Config {
            telegram_token: "BOT123".to_string(),
            telegram_chat_id: "424242".to_string(),
            telegram_api_base: api_base,
            ..Config::default()
        };
        TelegramBot::new(&config).unwrap()
    }

    #[tokio::test]
    async fn send_message_posts_expected_body_to_bot_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/botBOT123/sendMessage"))
            .and(body_json(json!({
                "chat_id": "424242",
                "text": "hello"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let bot = test_bot(server.uri());
        bot.send_message("hello").await.unwrap();
    }

    #[tokio::test]
    async fn send_message_maps_non_success_to_telegram_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/botBOT123/sendMessage"))
            .respond_with(
                ResponseTemplate::new(403).set_body_string(r#"{"ok":false,"description":"Forbidden"}"#),
            )
            .mount(&server)
            .await;

        let bot = test_bot(server.uri());
        match bot.send_message("hello").await.unwrap_err() {
            Error::Telegram { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("Forbidden"));
            }
            other => panic!("expected Telegram error, got {other:?}"),
        }
    }
}
