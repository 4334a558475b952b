//! Assistant Bot - Main entry point
//!
//! Runs one interactive session on stdin/stdout. Logs go to stderr so they
//! never interleave with the conversation.

use anyhow::Result;
use assistant_bot::{Config, Session};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let (config, rejected) = Config::from_env();

    // RUST_LOG wins; otherwise fall back to LOG_LEVEL, raised to warn when a
    // value was rejected so the notice below is not filtered out
    let level = if rejected.is_empty() {
        config.log_level.as_str()
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    for e in &rejected {
        warn!("Ignoring configuration value, using default: {}", e);
    }
    info!(log_level = %config.log_level, "Configuration loaded");

    let mut session = Session::new();
    let mut out = stdout();

    if let Err(e) = session.run(BufReader::new(stdin()), &mut out).await {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    Ok(())
}
