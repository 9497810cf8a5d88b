//! Fixed-interval polling loop.
//!
//! One iteration is fetch → validate → format → notify → advance the
//! `from_date` watermark. The loop sleeps a fixed interval between iterations
//! regardless of outcome: success, transient network failure, and malformed
//! response all wait the same duration and retry indefinitely. Errors inside
//! an iteration never stop the loop; they are logged with a generic failure
//! prefix and the iteration is abandoned.

use crate::config::Config;
use crate::error::{Result, ShapeError};
use crate::practicum::{PracticumClient, check_response};
use crate::telegram::TelegramBot;
use crate::verdict::parse_status;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Homework status poller
///
/// Owns the API client, the notifier, and the single piece of loop state:
/// the `from_date` watermark of the last successful poll. The watermark is
/// not persisted; a restart re-polls from 0.
pub struct Poller {
    /// Client for the homework status API
    client: PracticumClient,

    /// Notifier for the destination chat
    bot: TelegramBot,

    /// Sleep between iterations
    poll_interval: Duration,

    /// Unix timestamp (seconds) of the last server-reported `current_date`
    last_timestamp: i64,
}

impl Poller {
    /// Creates a poller from the configuration.
    ///
    /// # Errors
    /// Returns an error if either HTTP client cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: PracticumClient::new(config)?,
            bot: TelegramBot::new(config)?,
            poll_interval: config.poll_interval,
            last_timestamp: 0,
        })
    }

    /// Current `from_date` watermark (unix seconds).
    pub fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    /// Runs one poll iteration.
    ///
    /// On success the watermark advances to the response's `current_date`.
    /// A failed notification send is logged and dropped without failing the
    /// iteration: the upstream state was read successfully, only delivery was
    /// lost, and re-sending on the next cycle would duplicate notifications.
    ///
    /// # Errors
    /// Any fetch, validation, or formatting failure. The watermark is left
    /// untouched on error, so the next iteration re-queries the same window.
    pub async fn poll_once(&mut self) -> Result<()> {
        let response = self.client.fetch_statuses(self.last_timestamp).await?;

        let record = check_response(&response)?;
        info!("homework status update received");

        let message = parse_status(record)?;

        if let Err(e) = self.bot.send_message(&message).await {
            error!(error = %e, "failed to deliver notification, message dropped");
        }

        let current_date = response
            .get("current_date")
            .ok_or(ShapeError::MissingKey("current_date"))?;
        self.last_timestamp = current_date
            .as_i64()
            .ok_or_else(|| ShapeError::wrong_type("integer", current_date))?;

        Ok(())
    }

    /// Runs the poll loop until `shutdown` is cancelled.
    ///
    /// Every iteration error is handled identically: logged at ERROR and
    /// retried after the fixed interval. The loop itself never fails.
    pub async fn run(mut self, shutdown: CancellationToken) {
        info!(interval = ?self.poll_interval, "poller started");

        loop {
            if shutdown.is_cancelled() {
                break;
            }

            if let Err(e) = self.poll_once().await {
                error!(error = %e, "program failure, retrying next cycle");
            }

            tokio::select! {
                _ = sleep(self.poll_interval) => {}
                _ = shutdown.cancelled() => break,
            }
        }

        info!("poller stopped");
    }
}
