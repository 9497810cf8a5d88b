//! Binary entry point for the homework status watcher.
//!
//! Loads `.env`, installs tracing sinks (stderr plus a daily-rolling log
//! file), validates the required tokens, and runs the poller until a
//! termination signal arrives. A missing token aborts before the loop starts;
//! nothing after startup terminates the process except a signal.

use hw_watch::{Config, Poller, run_with_shutdown};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; real deployments may set variables directly
    dotenvy::dotenv().ok();

    let file_appender = tracing_appender::rolling::daily("logs", "hw-watch.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    let config = Config::from_env();
    config.validate()?;

    let poller = Poller::new(&config)?;
    run_with_shutdown(poller).await;

    Ok(())
}
