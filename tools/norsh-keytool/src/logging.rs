//! Subscriber setup. Logs go to stderr so stdout carries only results.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{KeytoolConfig, KeytoolError};

/// Install the global `tracing` subscriber.
pub fn init_logging(config: &KeytoolConfig) -> Result<(), KeytoolError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| KeytoolError::Logging(e.to_string()))?;

    if config.json_logs {
        // JSON output for log shippers
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| KeytoolError::Logging(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| KeytoolError::Logging(e.to_string()))?;
    }

    tracing::debug!(
        level = %config.log_level,
        json = config.json_logs,
        "logging initialized"
    );
    Ok(())
}
