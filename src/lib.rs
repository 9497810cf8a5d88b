//! # hw-watch
//!
//! Homework-review status watcher: polls the Practicum homework status API on
//! a fixed interval and forwards status-change verdicts to a Telegram chat.
//!
//! ## Design Philosophy
//!
//! hw-watch is deliberately small and sequential:
//! - **One pipeline** - fetch, validate, format, notify, sleep, repeat
//! - **Typed errors** - every failure of an iteration is a [`Error`] variant,
//!   logged and retried next cycle; nothing inside the loop panics
//! - **Library-first** - the binary is a thin wrapper; embedders can drive
//!   [`Poller::poll_once`] themselves
//!
//! ## Quick Start
//!
//! ```no_run
//! use hw_watch::{Config, Poller, run_with_shutdown};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!
//!     let poller = Poller::new(&config)?;
//!
//!     // Run with automatic signal handling
//!     run_with_shutdown(poller).await;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Polling loop
pub mod poller;
/// Homework status API client and response validation
pub mod practicum;
/// Telegram notifier
pub mod telegram;
/// Status-to-verdict mapping and message formatting
pub mod verdict;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result, ShapeError};
pub use poller::Poller;
pub use practicum::{PracticumClient, check_response};
pub use telegram::TelegramBot;
pub use verdict::{HomeworkStatus, NOT_SUBMITTED_MESSAGE, parse_status};

use tokio_util::sync::CancellationToken;

/// Runs the poller until a termination signal arrives.
///
/// - **Unix:** listens for SIGTERM and SIGINT, falling back to
///   `tokio::signal::ctrl_c()` if signal registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
///
/// # Example
///
/// ```no_run
/// use hw_watch::{Config, Poller, run_with_shutdown};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let poller = Poller::new(&Config::from_env())?;
///     run_with_shutdown(poller).await;
///     Ok(())
/// }
/// ```
pub async fn run_with_shutdown(poller: Poller) {
    let shutdown = CancellationToken::new();
    let handle = tokio::spawn(poller.run(shutdown.clone()));

    wait_for_signal().await;
    shutdown.cancel();
    handle.await.ok();
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Signal registration may fail in restricted environments (containers, tests)
    match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        _ => {
            tracing::warn!("Could not register signal handlers, using ctrl_c fallback");
            tokio::signal::ctrl_c().await.ok();
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
